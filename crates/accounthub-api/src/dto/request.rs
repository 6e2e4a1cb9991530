//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Text fields of the multipart registration request, collected before
/// validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RegisterFields {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Mobile number.
    #[validate(length(min = 7, max = 20, message = "A valid mobile number is required"))]
    pub mobile: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Text fields of the multipart profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileFields {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Mobile number.
    #[validate(length(min = 7, max = 20, message = "A valid mobile number is required"))]
    pub mobile: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body for the verification-mail resend, forgot-password, and send-OTP
/// endpoints, all of which take just an email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Password-reset form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordForm {
    /// The user the reset applies to, carried by the rendered form.
    pub user_id: Uuid,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Confirmation of the new password.
    pub c_password: String,
}

/// OTP verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// The user the code was issued to.
    pub user_id: Uuid,
    /// The submitted 4-digit code.
    #[validate(range(min = 1000, max = 9999, message = "OTP must be a 4-digit code"))]
    pub otp: i32,
}

/// Optional logout body; the token may also arrive via header or query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Bearer token to revoke.
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_rejects_bad_email() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: "secret".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_verify_otp_range() {
        let req = VerifyOtpRequest {
            user_id: Uuid::new_v4(),
            otp: 999,
        };
        assert!(req.validate().is_err());

        let req = VerifyOtpRequest {
            user_id: Uuid::new_v4(),
            otp: 1000,
        };
        assert!(req.validate().is_ok());
    }
}
