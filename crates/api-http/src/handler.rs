//! HTTP Route Handlers
//!
//! POST /users/        - create a user, respond with the public projection
//! GET  /debug/users/  - first stored record vs. its projection
//! GET  /              - static greeting

use crate::error::ApiError;
use crate::types::MessageResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use respmodel_core::application::{DebugSnapshot, UserService};
use respmodel_core::domain::UserOut;
use std::sync::Arc;

pub type SharedUserService = Arc<UserService>;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::greeting())
}

/// The body is taken as untyped JSON so that every schema violation is
/// reported by the core validator, not by the extractor.
pub async fn create_user(
    State(service): State<SharedUserService>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UserOut>), ApiError> {
    let Json(body) = payload?;
    let user = service.create_user(&body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn debug_users(
    State(service): State<SharedUserService>,
) -> Result<Json<DebugSnapshot>, ApiError> {
    let snapshot = service.debug_snapshot().await?;
    Ok(Json(snapshot))
}
