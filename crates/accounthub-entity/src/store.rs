//! Async access contracts for the persistent stores.
//!
//! The auth engine is written against these traits rather than concrete
//! repositories, so the persistence engine stays swappable and the engine
//! is testable without a live database. All filters are exact-match, all
//! single-row writes are atomic at the row level; multi-step sequences
//! (delete-then-insert) are *not* transactional.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use accounthub_core::AppResult;

use crate::token::{OtpRecord, PasswordResetToken, RevokedToken};
use crate::user::{NewUser, ProfileUpdate, User};

/// Credential store: persists user records.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user. Fails with a conflict error if the email exists.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Mark a user as verified. Idempotent at the store level.
    async fn set_verified(&self, id: Uuid) -> AppResult<()>;

    /// Replace a user's password hash.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Update profile fields and return the updated user.
    async fn update_profile(&self, data: &ProfileUpdate) -> AppResult<User>;
}

/// Token ledger, reset-token half: persists password-reset artifacts.
#[async_trait]
pub trait PasswordResetStore: Send + Sync + 'static {
    /// Look up a token row by its opaque token string.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>>;

    /// Look up the live token row for a user, if any.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<PasswordResetToken>>;

    /// Insert a new token row for a user.
    async fn insert(&self, user_id: Uuid, token: &str) -> AppResult<PasswordResetToken>;

    /// Delete every token row for a user. Returns the number removed.
    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Token ledger, OTP half: persists one-time verification codes.
#[async_trait]
pub trait OtpStore: Send + Sync + 'static {
    /// Look up the current OTP record for a user.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<OtpRecord>>;

    /// Look up an OTP record matching both user and code exactly.
    async fn find_by_user_and_code(&self, user_id: Uuid, otp: i32) -> AppResult<Option<OtpRecord>>;

    /// Atomically insert or replace the OTP record for a user.
    async fn upsert(&self, user_id: Uuid, otp: i32, issued_at: DateTime<Utc>)
    -> AppResult<OtpRecord>;

    /// Delete the OTP record for a user. Returns the number removed.
    async fn delete_by_user(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Session revocation list: persists blacklisted bearer tokens.
#[async_trait]
pub trait RevocationStore: Send + Sync + 'static {
    /// Record a token as revoked. Inserting an already-revoked token is a
    /// no-op.
    async fn insert(&self, token: &str) -> AppResult<RevokedToken>;

    /// Whether the exact token string has been revoked.
    async fn is_revoked(&self, token: &str) -> AppResult<bool>;

    /// Remove revocation rows created before `cutoff`. Returns the number
    /// removed.
    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64>;
}
