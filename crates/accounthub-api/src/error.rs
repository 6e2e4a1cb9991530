//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use accounthub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false` for errors.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details, e.g. field-level validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// A wrapper so handlers can return `Result<_, ApiError>` while domain
/// errors convert transparently.
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// A plain validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            inner: AppError::validation(message),
            details: None,
        }
    }

    /// A validation failure with field-level details attached.
    pub fn validation_details(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            inner: AppError::validation(message),
            details: Some(details),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self {
            inner: err,
            details: None,
        }
    }
}

impl From<accounthub_auth::error::AuthError> for ApiError {
    fn from(err: accounthub_auth::error::AuthError) -> Self {
        Self {
            inner: err.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(&self.inner.kind);

        if status.is_server_error() {
            tracing::error!(error = %self.inner.message, "Internal server error");
        }

        let body = ApiErrorResponse {
            success: false,
            error: error_code.to_string(),
            message: self.inner.message.clone(),
            details: self.details,
        };

        (status, Json(body)).into_response()
    }
}

fn status_for(kind: &ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
        ErrorKind::Session => (StatusCode::UNAUTHORIZED, "SESSION_EXPIRED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::RateLimit => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ErrorKind::Database
        | ErrorKind::Mail
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

#[cfg(test)]
mod tests {
    use accounthub_auth::error::AuthError;

    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ErrorKind::Session).0, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&ErrorKind::RateLimit).0, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            status_for(&ErrorKind::Database).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_error_converts_through() {
        let err: ApiError = AuthError::OtpCooldown.into();
        assert_eq!(status_for(&err.inner.kind).0, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.inner.message, "Please try again after 1 minute");
    }
}
