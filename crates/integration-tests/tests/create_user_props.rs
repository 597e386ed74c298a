//! POST /users/ over generated valid payloads

mod common;

use axum::http::StatusCode;
use common::{TestApp, SENSITIVE_FIELDS};
use proptest::prelude::*;
use serde_json::{json, Value};

fn email() -> impl Strategy<Value = String> {
    ("[a-z0-9][a-z0-9._+-]{0,11}", "[a-z0-9]{1,10}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

fn payload() -> impl Strategy<Value = Value> {
    (
        "[A-Za-z0-9_]{1,16}",
        email(),
        proptest::option::of("[A-Za-z .'-]{0,24}"),
        "[ -~]{0,24}",
    )
        .prop_map(|(username, email, full_name, password)| {
            let mut body = json!({
                "username": username,
                "email": email,
                "password": password,
            });
            if let Some(full_name) = full_name {
                body["full_name"] = json!(full_name);
            }
            body
        })
}

fn create(body: &Value) -> (StatusCode, Value) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async {
        let app = TestApp::new();
        app.post_json("/users/", body).await
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_valid_payload_returns_exactly_public_fields(body in payload()) {
        let (status, out) = create(&body);
        prop_assert_eq!(status, StatusCode::CREATED);

        let object = out.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        prop_assert_eq!(keys, vec!["email", "full_name", "join_date", "username"]);

        prop_assert_eq!(&out["username"], &body["username"]);
        prop_assert_eq!(&out["email"], &body["email"]);
        let full_name = body.get("full_name").cloned().unwrap_or(Value::Null);
        prop_assert_eq!(&out["full_name"], &full_name);
        prop_assert!(out["join_date"].is_string());
    }

    #[test]
    fn test_valid_payload_never_leaks_sensitive_keys(body in payload()) {
        let (status, out) = create(&body);
        prop_assert_eq!(status, StatusCode::CREATED);

        for field in SENSITIVE_FIELDS {
            prop_assert!(out.get(field).is_none(), "{} leaked", field);
        }
    }
}
