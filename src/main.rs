//! AccountHub Server — user accounts, email verification, and sessions.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use accounthub_api::state::AppState;
use accounthub_auth::engine::AuthEngine;
use accounthub_auth::jwt::{JwtDecoder, JwtEncoder};
use accounthub_auth::password::PasswordHasher;
use accounthub_auth::sweeper::RevocationSweeper;
use accounthub_core::config::AppConfig;
use accounthub_core::error::AppError;
use accounthub_database::connection::DatabasePool;
use accounthub_database::repositories::otp::OtpRepository;
use accounthub_database::repositories::password_reset::PasswordResetRepository;
use accounthub_database::repositories::revoked::RevokedTokenRepository;
use accounthub_database::repositories::user::UserRepository;
use accounthub_entity::store::{OtpStore, PasswordResetStore, RevocationStore, UserStore};
use accounthub_mailer::queue::MailQueue;
use accounthub_mailer::sender::{LogMailSender, MailSender};
use accounthub_mailer::HttpApiMailSender;

#[tokio::main]
async fn main() {
    let env = std::env::var("ACCOUNTHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AccountHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Upload directories ───────────────────────────────
    for dir in ["image", "document"] {
        let path = format!("{}/{}", config.uploads.root, dir);
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dir '{path}': {e}")))?;
    }

    // ── Step 2: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    db.migrate().await?;

    // ── Step 3: Stores ───────────────────────────────────────────
    let pool = db.pool();
    let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(pool.clone()));
    let resets: Arc<dyn PasswordResetStore> = Arc::new(PasswordResetRepository::new(pool.clone()));
    let otps: Arc<dyn OtpStore> = Arc::new(OtpRepository::new(pool.clone()));
    let revocations: Arc<dyn RevocationStore> =
        Arc::new(RevokedTokenRepository::new(pool.clone()));

    // ── Step 4: Mail gateway ─────────────────────────────────────
    tracing::info!("Initializing mail gateway (provider: {})...", config.mail.provider);
    let sender: Arc<dyn MailSender> = match config.mail.provider.as_str() {
        "api" => Arc::new(HttpApiMailSender::new(&config.mail)?),
        _ => Arc::new(LogMailSender),
    };
    let (mail_queue, mail_dispatcher) = MailQueue::new(sender);

    // ── Step 5: Auth engine ──────────────────────────────────────
    tracing::info!("Initializing authentication engine...");
    let hasher = PasswordHasher::new();
    let encoder = JwtEncoder::new(&config.auth);
    let decoder = JwtDecoder::new(&config.auth);

    let engine = AuthEngine::new(
        users,
        resets,
        otps,
        Arc::clone(&revocations),
        hasher,
        encoder,
        mail_queue,
        config.auth.clone(),
        config.server.public_url.clone(),
    );

    // ── Step 6: Background tasks ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let dispatcher_handle = tokio::spawn(mail_dispatcher.run(shutdown_rx.clone()));

    let sweeper = RevocationSweeper::new(Arc::clone(&revocations), &config.auth);
    let sweeper_handle = tokio::spawn(sweeper.run(shutdown_rx.clone()));

    // ── Step 7: HTTP server ──────────────────────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        engine,
        decoder,
        uploads: Arc::new(accounthub_api::uploads::LocalUploadStore::new(
            config.uploads.root.clone(),
        )),
    };

    let app = accounthub_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AccountHub server listening on {addr}");

    // ── Step 8: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 9: Wait for background tasks ────────────────────────
    tracing::info!("Waiting for background tasks to complete...");
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let _ = tokio::time::timeout(grace, dispatcher_handle).await;
    let _ = tokio::time::timeout(grace, sweeper_handle).await;

    db.close().await;
    tracing::info!("AccountHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
