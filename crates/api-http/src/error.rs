//! HTTP Error Types
//!
//! Maps application errors to status codes: validation failures become 422
//! with per-field details, everything else a bare 500.

use crate::types::{InternalErrorBody, ValidationErrorBody, INTERNAL_ERROR_DETAIL};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use respmodel_core::domain::{FieldError, ValidationErrors};
use respmodel_core::error::AppError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("{0}")]
    Internal(AppError),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Internal(other),
        }
    }
}

/// Unparseable body or wrong content type
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(FieldError::json_invalid(rejection.body_text()).into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(detail) => {
                (status, Json(ValidationErrorBody { detail })).into_response()
            }
            ApiError::Internal(err) => {
                error!(error = %err, "Request failed");
                (
                    status,
                    Json(InternalErrorBody {
                        detail: INTERNAL_ERROR_DETAIL,
                    }),
                )
                    .into_response()
            }
        }
    }
}
