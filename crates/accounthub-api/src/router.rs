//! Route definitions for the AccountHub HTTP API.
//!
//! JSON endpoints and browser-facing HTML pages share one router mounted
//! at the root. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.uploads.max_upload_size_bytes as usize;

    Router::new()
        .merge(account_routes())
        .merge(password_routes())
        .merge(otp_routes())
        .merge(page_routes())
        .route("/health", get(handlers::health::health))
        .fallback(handlers::pages::not_found)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registration, login, session, and profile endpoints.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh-token", post(handlers::auth::refresh))
        .route("/logout", post(handlers::auth::logout))
        .route("/profile", get(handlers::user::profile))
        .route("/update-profile", post(handlers::user::update_profile))
        .route(
            "/send-mail-verification",
            post(handlers::verification::send_mail_verification),
        )
}

/// Password recovery endpoints, JSON and form-based.
fn password_routes() -> Router<AppState> {
    Router::new()
        .route("/forget-password", post(handlers::password::forget_password))
        .route("/reset-password", post(handlers::password::reset_password))
}

/// Email OTP endpoints.
fn otp_routes() -> Router<AppState> {
    Router::new()
        .route("/send-email-otp", post(handlers::otp::send_email_otp))
        .route("/verify-email-otp", post(handlers::otp::verify_email_otp))
}

/// Browser-facing HTML pages.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mail-verification",
            get(handlers::pages::mail_verification),
        )
        .route(
            "/reset-password",
            get(handlers::pages::reset_password_form),
        )
        .route("/reset-success", get(handlers::pages::reset_success))
}
