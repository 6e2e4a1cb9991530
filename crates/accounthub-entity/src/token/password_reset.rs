//! Password-reset token entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A one-time password-recovery token.
///
/// At most one live token exists per user: issuing a new one deletes all
/// prior rows for that user first. Rows are also removed when the password
/// update completes. Reset tokens carry no timestamp-based expiry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordResetToken {
    /// Row identifier.
    pub id: Uuid,
    /// The user this token belongs to.
    pub user_id: Uuid,
    /// Opaque random token string embedded in the reset link.
    pub token: String,
    /// When the token was issued.
    pub created_at: DateTime<Utc>,
}
