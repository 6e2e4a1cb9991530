//! Background retention sweep for the session revocation list.
//!
//! A revoked token only needs to stay on the list until it would have
//! expired on its own. The sweeper deletes rows older than the refresh TTL
//! on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::watch;
use tracing::{error, info};

use accounthub_core::config::AuthConfig;
use accounthub_entity::store::RevocationStore;

/// Periodically prunes expired rows from the revocation list.
pub struct RevocationSweeper {
    revocations: Arc<dyn RevocationStore>,
    retention: ChronoDuration,
    interval: Duration,
}

impl RevocationSweeper {
    pub fn new(revocations: Arc<dyn RevocationStore>, config: &AuthConfig) -> Self {
        Self {
            revocations,
            retention: ChronoDuration::hours(config.jwt_refresh_ttl_hours as i64),
            interval: Duration::from_secs(config.revocation_sweep_interval_seconds),
        }
    }

    /// Run the sweep loop until shutdown is signalled.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(interval_secs = self.interval.as_secs(), "Revocation sweeper started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.tick().await; // first tick fires immediately

        loop {
            tokio::select! {
                _ = ticker.tick() => self.sweep().await,
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Revocation sweeper stopped");
    }

    async fn sweep(&self) {
        let cutoff = Utc::now() - self.retention;
        match self.revocations.prune_older_than(cutoff).await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "Pruned expired revocations"),
            Err(e) => error!(error = %e, "Revocation sweep failed"),
        }
    }
}
