//! HTTP Request/Response Types
//!
//! Bodies that are not domain types. Users themselves are serialized straight
//! from `UserOut` / `DebugSnapshot`.

use respmodel_core::domain::ValidationErrors;
use serde::Serialize;

pub const GREETING: &str = "Response Model Demo - POST /users/ to create a user";

pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// GET / - Static greeting
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn greeting() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}

/// 422 body: one entry per failing field
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorBody {
    pub detail: ValidationErrors,
}

/// 500 body: cause is logged, never returned
#[derive(Debug, Clone, Serialize)]
pub struct InternalErrorBody {
    pub detail: &'static str,
}
