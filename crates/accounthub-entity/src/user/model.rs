//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::VerificationStatus;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address. Unique across all users, matched exactly as stored.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Verification state of the account.
    pub status: VerificationStatus,
    /// Stored reference to the profile image upload, e.g. `image/<file>`.
    pub image: Option<String>,
    /// Stored reference to the document upload, e.g. `document/<file>`.
    pub document: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account has completed email verification.
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Stored image reference (optional).
    pub image: Option<String>,
    /// Stored document reference (optional).
    pub document: Option<String>,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// The user ID to update.
    pub id: Uuid,
    /// New display name.
    pub name: String,
    /// New mobile number.
    pub mobile: String,
    /// Replacement image reference, if a new image was uploaded.
    pub image: Option<String>,
}
