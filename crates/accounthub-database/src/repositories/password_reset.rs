//! Password-reset token repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use accounthub_core::error::{AppError, AppResult, ErrorKind};
use accounthub_entity::store::PasswordResetStore;
use accounthub_entity::token::PasswordResetToken;

/// Repository for password-reset tokens.
///
/// The delete-then-insert sequence used by the forgot-password flow is two
/// separate statements; a concurrent reader can observe a transient state
/// with no token row for the user.
#[derive(Debug, Clone)]
pub struct PasswordResetRepository {
    pool: PgPool,
}

impl PasswordResetRepository {
    /// Create a new password-reset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PasswordResetStore for PasswordResetRepository {
    async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>> {
        sqlx::query_as::<_, PasswordResetToken>("SELECT * FROM password_resets WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reset token", e)
            })
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<PasswordResetToken>> {
        sqlx::query_as::<_, PasswordResetToken>(
            "SELECT * FROM password_resets WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find reset token by user", e)
        })
    }

    async fn insert(&self, user_id: Uuid, token: &str) -> AppResult<PasswordResetToken> {
        sqlx::query_as::<_, PasswordResetToken>(
            "INSERT INTO password_resets (user_id, token) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert reset token", e))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM password_resets WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reset tokens", e)
            })?;

        Ok(result.rows_affected())
    }
}
