//! The account state machine.
//!
//! Every business flow lives here: registration, link and OTP based email
//! verification, login, token refresh, logout, and password reset. The
//! engine talks to persistence only through the store traits and submits
//! mail through the fire-and-forget queue, so no flow ever blocks on SMTP
//! or a mail API.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use accounthub_core::config::AuthConfig;
use accounthub_core::error::{AppError, ErrorKind};
use accounthub_entity::store::{OtpStore, PasswordResetStore, RevocationStore, UserStore};
use accounthub_entity::token::PasswordResetToken;
use accounthub_entity::user::{NewUser, ProfileUpdate, User};
use accounthub_mailer::message::{otp_mail, reset_mail, verification_mail, welcome_mail};
use accounthub_mailer::queue::MailQueue;

use crate::error::AuthError;
use crate::expiry::within_window;
use crate::jwt::{JwtEncoder, TokenPair};
use crate::otp;
use crate::password::PasswordHasher;


/// Input for a registration request, with the password still in plaintext.
/// Upload references are resolved by the caller before the engine runs.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub image: Option<String>,
    pub document: Option<String>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub tokens: TokenPair,
}

/// What happened when a verification link was followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The account moved from unverified to verified.
    Verified,
    /// The account was verified already; following the link again is
    /// harmless.
    AlreadyVerified,
}

/// Orchestrates every account flow over the injected stores.
#[derive(Clone)]
pub struct AuthEngine {
    users: Arc<dyn UserStore>,
    resets: Arc<dyn PasswordResetStore>,
    otps: Arc<dyn OtpStore>,
    revocations: Arc<dyn RevocationStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    mail: MailQueue,
    config: AuthConfig,
    public_url: String,
}

impl AuthEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserStore>,
        resets: Arc<dyn PasswordResetStore>,
        otps: Arc<dyn OtpStore>,
        revocations: Arc<dyn RevocationStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
        mail: MailQueue,
        config: AuthConfig,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            users,
            resets,
            otps,
            revocations,
            hasher,
            encoder,
            mail,
            config,
            public_url: public_url.into(),
        }
    }

    /// Register a new account and queue the verification and welcome mails.
    ///
    /// The pre-check and the insert are not atomic; a concurrent insert for
    /// the same email is caught by the store's unique constraint and folded
    /// into the same duplicate-email error.
    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&self, data: NewRegistration) -> Result<User, AuthError> {
        if self.users.find_by_email(&data.email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash_password(&data.password)?;
        let user = self
            .users
            .create(&NewUser {
                name: data.name,
                email: data.email,
                mobile: data.mobile,
                password_hash,
                image: data.image,
                document: data.document,
            })
            .await
            .map_err(fold_conflict)?;

        let verify_link = format!("{}/mail-verification?id={}", self.public_url, user.id);
        self.mail.submit(vec![
            verification_mail(&user.email, &user.name, &verify_link),
            welcome_mail(&user.email, &user.name),
        ]);

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Handle a followed verification link.
    #[instrument(skip(self))]
    pub async fn verify_by_link(&self, user_id: Uuid) -> Result<VerifyOutcome, AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified() {
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        self.users.set_verified(user_id).await?;
        info!(%user_id, "Email verified via link");
        Ok(VerifyOutcome::Verified)
    }

    /// Queue a fresh verification-link mail for an unverified account.
    #[instrument(skip(self))]
    pub async fn resend_verification(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if user.is_verified() {
            return Err(AuthError::AlreadyVerified(user.email));
        }

        let verify_link = format!("{}/mail-verification?id={}", self.public_url, user.id);
        self.mail
            .submit_one(verification_mail(&user.email, &user.name, &verify_link));
        Ok(())
    }

    /// Authenticate and issue a token pair.
    ///
    /// Unknown email and wrong password produce the identical error so the
    /// response does not leak which accounts exist. The verification check
    /// runs only after the password matched, for the same reason.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .hasher
            .verify_password(password, &user.password_hash)?
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_verified() {
            return Err(AuthError::NotVerified);
        }

        let tokens = self
            .encoder
            .issue_pair(user.id, &user.name, &user.email, user.is_verified())?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { user, tokens })
    }

    /// Issue a fresh token pair for an already-authenticated user.
    /// The presenting token stays valid; nothing is rotated or revoked.
    #[instrument(skip(self))]
    pub async fn refresh(&self, user_id: Uuid) -> Result<TokenPair, AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(self
            .encoder
            .issue_pair(user.id, &user.name, &user.email, user.is_verified())?)
    }

    /// Revoke the presented token. Idempotent.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.revocations.insert(token).await?;
        info!("Session revoked");
        Ok(())
    }

    /// Whether a token has been revoked. Checked by the guard before
    /// the token is decoded at all.
    pub async fn is_revoked(&self, token: &str) -> Result<bool, AuthError> {
        Ok(self.revocations.is_revoked(token).await?)
    }

    /// Start a password reset: replace any live token for the user and mail
    /// the reset link.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        self.resets.delete_by_user(user.id).await?;
        let token = otp::generate_reset_token();
        self.resets.insert(user.id, &token).await?;

        let reset_link = format!("{}/reset-password?token={}", self.public_url, token);
        self.mail
            .submit_one(reset_mail(&user.email, &user.name, &reset_link));

        info!(user_id = %user.id, "Password reset token issued");
        Ok(())
    }

    /// Look up a live reset token, for rendering the reset form.
    pub async fn find_reset_token(
        &self,
        token: &str,
    ) -> Result<Option<PasswordResetToken>, AuthError> {
        Ok(self.resets.find_by_token(token).await?)
    }

    /// Complete a password reset and clear the user's reset tokens.
    ///
    /// Trusts the user id from the submitted form; the token was validated
    /// when the form was served, not here.
    #[instrument(skip(self, password, confirm))]
    pub async fn reset_password(
        &self,
        user_id: Uuid,
        password: &str,
        confirm: &str,
    ) -> Result<(), AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let password_hash = self.hasher.hash_password(password)?;
        self.users
            .update_password(user_id, &password_hash)
            .await
            .map_err(fold_not_found)?;
        self.resets.delete_by_user(user_id).await?;

        info!(%user_id, "Password reset completed");
        Ok(())
    }

    /// Issue (or re-issue, after the cooldown) a verification OTP.
    #[instrument(skip(self))]
    pub async fn send_otp(&self, email: &str) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        if user.is_verified() {
            return Err(AuthError::AlreadyVerified(user.email));
        }

        let now = Utc::now();
        if let Some(existing) = self.otps.find_by_user(user.id).await?
            && within_window(existing.issued_at, self.cooldown(), now)
        {
            return Err(AuthError::OtpCooldown);
        }

        let code = otp::generate_code();
        self.otps.upsert(user.id, code, now).await?;
        self.mail.submit_one(otp_mail(&user.email, &user.name, code));

        info!(user_id = %user.id, "OTP issued");
        Ok(())
    }

    /// Verify an account with a submitted OTP.
    ///
    /// A correct in-window code verifies the account and is consumed. An
    /// expired match is rejected and left in place; the next send replaces
    /// it through the upsert.
    #[instrument(skip(self, code))]
    pub async fn verify_otp(&self, user_id: Uuid, code: i32) -> Result<(), AuthError> {
        let record = self
            .otps
            .find_by_user_and_code(user_id, code)
            .await?
            .ok_or(AuthError::WrongOtp)?;

        if !within_window(record.issued_at, self.validity(), Utc::now()) {
            return Err(AuthError::OtpExpired);
        }

        self.users.set_verified(user_id).await?;
        self.otps.delete_by_user(user_id).await?;

        info!(%user_id, "Email verified via OTP");
        Ok(())
    }

    /// Fetch a user's profile.
    pub async fn profile(&self, user_id: Uuid) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Update a user's profile fields.
    #[instrument(skip(self, update), fields(user_id = %update.id))]
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, AuthError> {
        self.users
            .update_profile(&update)
            .await
            .map_err(fold_not_found)
    }

    fn cooldown(&self) -> Duration {
        Duration::seconds(self.config.otp_cooldown_seconds as i64)
    }

    fn validity(&self) -> Duration {
        Duration::seconds(self.config.otp_validity_seconds as i64)
    }
}

/// Store-level unique-constraint conflicts become the duplicate-email
/// outcome, closing the check-then-insert race.
fn fold_conflict(err: AppError) -> AuthError {
    if err.kind == ErrorKind::Conflict {
        AuthError::DuplicateEmail
    } else {
        AuthError::Store(err)
    }
}

fn fold_not_found(err: AppError) -> AuthError {
    if err.kind == ErrorKind::NotFound {
        AuthError::UserNotFound
    } else {
        AuthError::Store(err)
    }
}
