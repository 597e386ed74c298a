//! Router construction for the HTTP server.

use crate::handler::{self, SharedUserService};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the full axum router. Each route answers with and without the
/// trailing slash.
pub fn build_router(service: SharedUserService) -> Router {
    Router::new()
        .route("/", get(handler::root))
        .route("/users/", post(handler::create_user))
        .route("/users", post(handler::create_user))
        .route("/debug/users/", get(handler::debug_users))
        .route("/debug/users", get(handler::debug_users))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use respmodel_core::application::UserService;
    use respmodel_core::port::{PlaceholderSecrets, SystemTimeProvider};
    use respmodel_infra_memory::InMemoryUserRepository;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = UserService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(SystemTimeProvider),
            Arc::new(PlaceholderSecrets),
        );
        build_router(Arc::new(service))
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"message": "Response Model Demo - POST /users/ to create a user"})
        );
    }

    #[tokio::test]
    async fn test_routes_without_trailing_slash() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"username": "u", "email": "u@x.io", "password": "p"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/debug/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"username\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(resp).await;
        assert_eq!(body["detail"][0]["type"], "json_invalid");
        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_422() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users/")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = app()
            .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
