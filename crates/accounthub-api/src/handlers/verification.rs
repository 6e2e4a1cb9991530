//! Verification-mail resend handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::EmailRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// POST /send-mail-verification
pub async fn send_mail_verification(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state.engine.resend_verification(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Verification mail sent, please check your inbox",
    ))))
}
