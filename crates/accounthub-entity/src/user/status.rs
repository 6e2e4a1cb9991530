//! Account verification status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verification state of a user account.
///
/// Starts as `Unverified` at registration and transitions to `Verified`
/// exactly once, via either the mail-verification link or a correct OTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Account created, email ownership not yet proven.
    Unverified,
    /// Email ownership proven; account can log in.
    Verified,
}

impl VerificationStatus {
    /// Whether this status allows logging in.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Verified => "verified",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = accounthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unverified" => Ok(Self::Unverified),
            "verified" => Ok(Self::Verified),
            _ => Err(accounthub_core::AppError::validation(format!(
                "Invalid verification status: '{s}'. Expected one of: unverified, verified"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        assert_eq!(
            "verified".parse::<VerificationStatus>().unwrap(),
            VerificationStatus::Verified
        );
        assert_eq!(VerificationStatus::Unverified.as_str(), "unverified");
        assert!("pending".parse::<VerificationStatus>().is_err());
    }

    #[test]
    fn test_can_login() {
        assert!(VerificationStatus::Verified.can_login());
        assert!(!VerificationStatus::Unverified.can_login());
    }
}
