//! OTP repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use accounthub_core::error::{AppError, AppResult, ErrorKind};
use accounthub_entity::store::OtpStore;
use accounthub_entity::token::OtpRecord;

/// Repository for one-time verification codes, keyed by user id.
#[derive(Debug, Clone)]
pub struct OtpRepository {
    pool: PgPool,
}

impl OtpRepository {
    /// Create a new OTP repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpStore for OtpRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<OtpRecord>> {
        sqlx::query_as::<_, OtpRecord>("SELECT * FROM email_otps WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find OTP", e))
    }

    async fn find_by_user_and_code(&self, user_id: Uuid, otp: i32) -> AppResult<Option<OtpRecord>> {
        sqlx::query_as::<_, OtpRecord>("SELECT * FROM email_otps WHERE user_id = $1 AND otp = $2")
            .bind(user_id)
            .bind(otp)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find OTP by code", e)
            })
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        otp: i32,
        issued_at: DateTime<Utc>,
    ) -> AppResult<OtpRecord> {
        // Single-statement upsert: replacing the code and timestamp for a
        // user is atomic, never a read-then-write.
        sqlx::query_as::<_, OtpRecord>(
            "INSERT INTO email_otps (user_id, otp, issued_at) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id) DO UPDATE SET otp = EXCLUDED.otp, issued_at = EXCLUDED.issued_at \
             RETURNING *",
        )
        .bind(user_id)
        .bind(otp)
        .bind(issued_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert OTP", e))
    }

    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM email_otps WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete OTP", e))?;

        Ok(result.rows_affected())
    }
}
