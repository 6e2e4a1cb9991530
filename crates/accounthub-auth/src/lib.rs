//! # accounthub-auth
//!
//! The authentication and credential-lifecycle subsystem for AccountHub.
//!
//! ## Modules
//!
//! - `jwt` — bearer token creation and validation
//! - `password` — Argon2id password hashing
//! - `expiry` — pure time-window policy for OTP cooldown and validity
//! - `otp` — one-time code and reset-token generation
//! - `engine` — the account state machine (register, verify, login,
//!   logout, refresh, OTP, password reset)
//! - `sweeper` — revocation-list retention

pub mod engine;
pub mod error;
pub mod expiry;
pub mod jwt;
pub mod otp;
pub mod password;
pub mod sweeper;

pub use engine::{AuthEngine, LoginResult, NewRegistration, VerifyOutcome};
pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::PasswordHasher;
pub use sweeper::RevocationSweeper;
