//! One-time-password (OTP) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A short-lived 4-digit email verification code.
///
/// Keyed by `user_id`: re-issuing replaces the prior code and timestamp in a
/// single atomic upsert. Codes expire a fixed window after `issued_at` and
/// are deleted when successfully consumed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OtpRecord {
    /// The user this code was issued to.
    pub user_id: Uuid,
    /// The 4-digit code (1000–9999).
    pub otp: i32,
    /// When the code was issued.
    pub issued_at: DateTime<Utc>,
}
