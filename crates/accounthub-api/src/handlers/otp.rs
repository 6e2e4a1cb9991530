//! Email OTP handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{EmailRequest, VerifyOtpRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// POST /send-email-otp
pub async fn send_email_otp(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state.engine.send_otp(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "OTP sent to your email",
    ))))
}

/// POST /verify-email-otp
pub async fn verify_email_otp(
    State(state): State<AppState>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state.engine.verify_otp(req.user_id, req.otp).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Email verified successfully",
    ))))
}
