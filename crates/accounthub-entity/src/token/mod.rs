//! Short-lived credential artifacts: reset tokens, OTP codes, and the
//! session revocation list.

pub mod otp;
pub mod password_reset;
pub mod revoked;

pub use otp::OtpRecord;
pub use password_reset::PasswordResetToken;
pub use revoked::RevokedToken;
