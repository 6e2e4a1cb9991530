//! Password-reset handlers.

use axum::Json;
use axum::extract::{Form, State};
use axum::response::Redirect;

use crate::dto::request::{EmailRequest, ResetPasswordForm};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::handlers::validate;
use crate::state::AppState;

/// POST /forget-password
pub async fn forget_password(
    State(state): State<AppState>,
    Json(req): Json<EmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;

    state.engine.forgot_password(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password reset link sent to your email",
    ))))
}

/// POST /reset-password
///
/// Form submission from the rendered reset page. On success the browser
/// is redirected to the confirmation page.
pub async fn reset_password(
    State(state): State<AppState>,
    Form(form): Form<ResetPasswordForm>,
) -> Result<Redirect, ApiError> {
    validate(&form)?;

    state
        .engine
        .reset_password(form.user_id, &form.password, &form.c_password)
        .await?;

    Ok(Redirect::to("/reset-success"))
}
