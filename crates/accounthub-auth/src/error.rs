//! Domain errors for the authentication engine.

use thiserror::Error;

use accounthub_core::error::{AppError, ErrorKind};

/// Everything that can go wrong inside an auth-engine operation.
///
/// Store and infrastructure failures are carried through the `Store`
/// variant; the rest are business outcomes with fixed user-facing
/// messages.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with an email that already exists.
    #[error("Email already exists")]
    DuplicateEmail,

    /// No user exists for the given identifier.
    #[error("User not found")]
    UserNotFound,

    /// No user exists for the given email.
    #[error("Email doesn't exist")]
    EmailNotFound,

    /// The account is already verified; the requested (re-)verification
    /// makes no sense. Soft outcome, carries the address for the message.
    #[error("{0} is already verified")]
    AlreadyVerified(String),

    /// Unknown email or wrong password. Deliberately the same message for
    /// both so login does not reveal which half failed.
    #[error("Email and password is incorrect")]
    InvalidCredentials,

    /// Credentials are correct but the account has not verified its email.
    #[error("Email is not verified, please verify your email")]
    NotVerified,

    /// Password and confirmation did not match.
    #[error("Confirm password does not match")]
    PasswordMismatch,

    /// An OTP was requested again within the re-issue cooldown.
    #[error("Please try again after 1 minute")]
    OtpCooldown,

    /// No OTP record matches the submitted user/code pair.
    #[error("You entered a wrong otp")]
    WrongOtp,

    /// The matching OTP was issued too long ago.
    #[error("Your otp has expired")]
    OtpExpired,

    /// No bearer token was supplied on a protected operation.
    #[error("A token is required for authentication")]
    MissingToken,

    /// The supplied token failed signature or expiry checks.
    #[error("Invalid token")]
    InvalidToken,

    /// The supplied token is on the revocation list.
    #[error("This session has expired, please login again")]
    SessionRevoked,

    /// Store or infrastructure failure.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let message = err.to_string();
        match err {
            AuthError::DuplicateEmail => AppError::new(ErrorKind::Conflict, message),
            AuthError::UserNotFound | AuthError::EmailNotFound => {
                AppError::new(ErrorKind::NotFound, message)
            }
            AuthError::AlreadyVerified(_)
            | AuthError::PasswordMismatch
            | AuthError::WrongOtp
            | AuthError::OtpExpired => AppError::new(ErrorKind::Validation, message),
            AuthError::InvalidCredentials
            | AuthError::NotVerified
            | AuthError::MissingToken
            | AuthError::InvalidToken => AppError::new(ErrorKind::Authentication, message),
            AuthError::SessionRevoked => AppError::new(ErrorKind::Session, message),
            AuthError::OtpCooldown => AppError::new(ErrorKind::RateLimit, message),
            AuthError::Store(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let app: AppError = AuthError::DuplicateEmail.into();
        assert_eq!(app.kind, ErrorKind::Conflict);

        let app: AppError = AuthError::OtpCooldown.into();
        assert_eq!(app.kind, ErrorKind::RateLimit);

        let app: AppError = AuthError::SessionRevoked.into();
        assert_eq!(app.kind, ErrorKind::Session);

        let app: AppError = AuthError::Store(AppError::database("down")).into();
        assert_eq!(app.kind, ErrorKind::Database);
    }

    #[test]
    fn test_credentials_message_is_identical_for_both_failures() {
        // Unknown email and wrong password must be indistinguishable.
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Email and password is incorrect"
        );
    }
}
