//! Operational error types and response normalization.
//!
//! # Responsibilities
//! - Closed set of error kinds with fixed status codes
//! - Render every error as the JSON envelope
//!   `{ "status", "message", "errorType" }`
//! - Log unexpected errors server-side, never leak detail to clients
//!
//! # Design Decisions
//! - 4xx errors classify as "fail", 5xx as "error"
//! - Internal errors always render the same generic body; the real
//!   detail goes to the log only

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure a handler can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; the message is internal detail and is only logged.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("Unauthorized".to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn product_not_found() -> Self {
        ApiError::NotFound("Product not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable kind tag carried in the envelope for operational errors.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => "UnauthorizedError",
            ApiError::Validation(_) => "ValidationError",
            ApiError::NotFound(_) => "NotFoundError",
            ApiError::Internal(_) => "InternalError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "message": "Something went wrong!",
                    })),
                )
                    .into_response()
            }
            operational => (
                operational.status_code(),
                Json(json!({
                    "status": "fail",
                    "message": operational.to_string(),
                    "errorType": operational.error_type(),
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::unauthorized().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::product_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(ApiError::unauthorized().error_type(), "UnauthorizedError");
        assert_eq!(ApiError::validation("bad").error_type(), "ValidationError");
        assert_eq!(ApiError::product_not_found().error_type(), "NotFoundError");
    }

    #[test]
    fn test_response_status_matches_variant() {
        let resp = ApiError::product_not_found().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::Internal("db on fire".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
