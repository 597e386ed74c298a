//! Shared fixture: router over a fresh in-memory store

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use respmodel_api_http::build_router;
use respmodel_core::application::UserService;
use respmodel_core::port::{PlaceholderSecrets, SystemTimeProvider};
use respmodel_infra_memory::InMemoryUserRepository;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryUserRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(
            repo.clone(),
            Arc::new(SystemTimeProvider),
            Arc::new(PlaceholderSecrets),
        );

        Self {
            router: build_router(Arc::new(service)),
            repo,
        }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(request).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or_else(
            |_| serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
        );
        (status, body)
    }

    pub async fn stored(&self) -> usize {
        self.repo.snapshot().await.len()
    }
}

pub fn alice() -> Value {
    serde_json::json!({
        "username": "alice",
        "email": "alice@example.com",
        "full_name": "Alice A",
        "password": "secret"
    })
}

pub const SENSITIVE_FIELDS: [&str; 4] = ["password", "hashed_password", "internal_id", "api_key"];
