//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::CoreError;
use domain_quote::{FieldErrors, Notification, QuoteError};
use infra_render::RenderError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details, field_errors) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None, None),
            ApiError::Validation {
                message,
                field_errors,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                None,
                Some(field_errors),
            ),
            ApiError::Render(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "render_error",
                err.notification().title,
                Some(vec![err.to_string()]),
                None,
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
            field_errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Validation(field_errors) => ApiError::Validation {
                message: Notification::validation_failed().title,
                field_errors,
            },
            QuoteError::InvalidInput(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(what) => ApiError::NotFound(what),
        }
    }
}
