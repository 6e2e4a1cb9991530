//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// Minimum interval between OTP issues for the same user, in seconds.
    #[serde(default = "default_otp_cooldown")]
    pub otp_cooldown_seconds: u64,
    /// How long an issued OTP code stays valid, in seconds.
    #[serde(default = "default_otp_validity")]
    pub otp_validity_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Interval between revocation-list pruning sweeps, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub revocation_sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_hours: default_refresh_ttl(),
            otp_cooldown_seconds: default_otp_cooldown(),
            otp_validity_seconds: default_otp_validity(),
            password_min_length: default_password_min(),
            revocation_sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    120
}

fn default_refresh_ttl() -> u64 {
    48
}

fn default_otp_cooldown() -> u64 {
    60
}

fn default_otp_validity() -> u64 {
    180
}

fn default_password_min() -> usize {
    8
}

fn default_sweep_interval() -> u64 {
    3600
}
