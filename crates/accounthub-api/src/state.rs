//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use accounthub_auth::engine::AuthEngine;
use accounthub_auth::jwt::JwtDecoder;
use accounthub_core::config::AppConfig;

use crate::uploads::UploadStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone or `Arc`-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The account state machine.
    pub engine: AuthEngine,
    /// JWT validator used by the authentication guard.
    pub decoder: JwtDecoder,
    /// Where multipart uploads land.
    pub uploads: Arc<dyn UploadStore>,
}
