//! Error type and HTTP response body

use super::codes::ErrorCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// The primary error type for the storefront. Every failure is terminal for
/// the operation that produced it; the message is reported verbatim to the
/// caller as `{"error": "..."}`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Result type for fallible storefront operations
pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create a product not found error
    pub fn product_not_found() -> Self {
        Self::new(ErrorCode::ProductNotFound)
    }

    /// Create a duplicate email error with the friendly signup message
    pub fn email_exists() -> Self {
        Self::new(ErrorCode::EmailExists)
    }

    /// Create an upstream service error (blob sink, identity backend)
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UpstreamError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = Json(ErrorBody {
            error: self.message,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message_from_code() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_custom_message_preserved() {
        let err = AppError::upstream("bucket unavailable");
        assert_eq!(err.to_string(), "bucket unavailable");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_email_exists_is_friendly() {
        let err = AppError::email_exists();
        assert!(err.message.contains("already been registered"));
        assert_eq!(err.http_status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
