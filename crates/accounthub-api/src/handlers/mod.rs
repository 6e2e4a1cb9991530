//! HTTP request handlers, grouped by flow.

pub mod auth;
pub mod health;
pub mod otp;
pub mod pages;
pub mod password;
pub mod user;
pub mod verification;

use validator::Validate;

use crate::error::ApiError;

/// Run derive-based validation and surface failures as a 400 with
/// field-level details.
pub(crate) fn validate<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate().map_err(|errors| {
        ApiError::validation_details(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null),
        )
    })
}
