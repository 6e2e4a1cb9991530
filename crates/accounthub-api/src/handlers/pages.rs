//! Server-rendered HTML pages for the browser-facing verification and
//! password-reset flows.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use uuid::Uuid;

use accounthub_auth::engine::VerifyOutcome;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerificationQuery {
    pub id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    pub token: Option<String>,
}

/// GET /mail-verification?id=
///
/// The target of the mailed verification link. Always renders a page,
/// never a JSON error: the visitor is a person in a browser.
pub async fn mail_verification(
    State(state): State<AppState>,
    Query(query): Query<VerificationQuery>,
) -> Html<String> {
    let Some(user_id) = query.id else {
        return page("Verification failed", "<p>This verification link is not valid.</p>");
    };

    match state.engine.verify_by_link(user_id).await {
        Ok(VerifyOutcome::Verified) => page(
            "Email verified",
            "<p>Your email has been verified. You can now log in.</p>",
        ),
        Ok(VerifyOutcome::AlreadyVerified) => page(
            "Already verified",
            "<p>This email was verified earlier. You can log in.</p>",
        ),
        Err(_) => page(
            "Verification failed",
            "<p>This verification link is not valid.</p>",
        ),
    }
}

/// GET /reset-password?token=
///
/// Renders the reset form when the token maps to a live reset record,
/// otherwise a 404 page.
pub async fn reset_password_form(
    State(state): State<AppState>,
    Query(query): Query<ResetQuery>,
) -> (StatusCode, Html<String>) {
    let record = match &query.token {
        Some(token) => state.engine.find_reset_token(token).await.ok().flatten(),
        None => None,
    };

    match record {
        Some(record) => (
            StatusCode::OK,
            page(
                "Reset your password",
                &format!(
                    r#"<form method="post" action="/reset-password">
  <input type="hidden" name="user_id" value="{}">
  <label>New password <input type="password" name="password" required minlength="8"></label>
  <label>Confirm password <input type="password" name="c_password" required minlength="8"></label>
  <button type="submit">Reset password</button>
</form>"#,
                    record.user_id
                ),
            ),
        ),
        None => (
            StatusCode::NOT_FOUND,
            page(
                "Link expired",
                "<p>This reset link is not valid. Please request a new one.</p>",
            ),
        ),
    }
}

/// GET /reset-success
pub async fn reset_success() -> Html<String> {
    page(
        "Password updated",
        "<p>Your password has been changed. You can now log in with it.</p>",
    )
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        page("Page not found", "<p>The page you are looking for does not exist.</p>"),
    )
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_success_page_renders() {
        let Html(html) = reset_success().await;
        assert!(html.contains("Password updated"));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let (status, _) = not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
