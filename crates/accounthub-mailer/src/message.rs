//! Outbound mail jobs and message templates.

use serde::{Deserialize, Serialize};

/// A single outbound mail delivery request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailJob {
    /// Recipient address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub content: String,
}

impl MailJob {
    /// Create a new mail job.
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            content: content.into(),
        }
    }
}

/// Verification-link mail sent at registration and on resend.
pub fn verification_mail(email: &str, name: &str, verify_link: &str) -> MailJob {
    MailJob::new(
        email,
        "Email Verification",
        format!("<p>Hi {name}, please <a href=\"{verify_link}\">verify</a> your email.</p>"),
    )
}

/// Welcome mail sent right after registration.
pub fn welcome_mail(email: &str, name: &str) -> MailJob {
    MailJob::new(
        email,
        "Thank you for joining us",
        format!("<h1>Hello {name}, welcome aboard!</h1>"),
    )
}

/// Password-reset link mail.
pub fn reset_mail(email: &str, name: &str, reset_link: &str) -> MailJob {
    MailJob::new(
        email,
        "Reset Password",
        format!(
            "<p>Hi {name}, please click <a href=\"{reset_link}\">here</a> to reset your password.</p>"
        ),
    )
}

/// OTP code mail.
pub fn otp_mail(email: &str, name: &str, otp: i32) -> MailJob {
    MailJob::new(
        email,
        "OTP Verification",
        format!("<p>Hi <b>{name}</b>, your verification code is <h4>{otp}</h4></p>"),
    )
}
