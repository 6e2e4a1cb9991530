//! Revoked-token repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use accounthub_core::error::{AppError, AppResult, ErrorKind};
use accounthub_entity::store::RevocationStore;
use accounthub_entity::token::RevokedToken;

/// Repository for the session revocation list.
#[derive(Debug, Clone)]
pub struct RevokedTokenRepository {
    pool: PgPool,
}

impl RevokedTokenRepository {
    /// Create a new revoked-token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevocationStore for RevokedTokenRepository {
    async fn insert(&self, token: &str) -> AppResult<RevokedToken> {
        sqlx::query_as::<_, RevokedToken>(
            "INSERT INTO revoked_tokens (token) VALUES ($1) \
             ON CONFLICT (token) DO UPDATE SET token = EXCLUDED.token \
             RETURNING *",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke token", e))
    }

    async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM revoked_tokens WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check revocation", e)
                })?;

        Ok(found.is_some())
    }

    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to prune revocation list", e)
            })?;

        Ok(result.rows_affected())
    }
}
