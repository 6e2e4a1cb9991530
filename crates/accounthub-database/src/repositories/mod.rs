//! Concrete PostgreSQL repositories implementing the entity store
//! contracts.

pub mod otp;
pub mod password_reset;
pub mod revoked;
pub mod user;

pub use otp::OtpRepository;
pub use password_reset::PasswordResetRepository;
pub use revoked::RevokedTokenRepository;
pub use user::UserRepository;
