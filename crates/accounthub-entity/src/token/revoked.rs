//! Revoked session-token entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bearer token explicitly invalidated before its natural expiry.
///
/// Inserted on logout. There is no un-revoke operation; rows are only
/// removed by the background sweeper once they are older than the longest
/// token TTL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    /// The exact bearer token string that was revoked.
    pub token: String,
    /// When the token was revoked.
    pub created_at: DateTime<Utc>,
}
