use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use accounthub_core::config::AuthConfig;
use accounthub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// An access/refresh token pair as handed back by login and refresh.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Signs access and refresh tokens with the configured HS256 secret.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.jwt_access_ttl_minutes as i64),
            refresh_ttl: Duration::hours(config.jwt_refresh_ttl_hours as i64),
        }
    }

    /// Issue a fresh access/refresh pair for a user.
    pub fn issue_pair(
        &self,
        user_id: Uuid,
        name: &str,
        email: &str,
        verified: bool,
    ) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let access_expires_at = now + self.access_ttl;
        let refresh_expires_at = now + self.refresh_ttl;

        let access_token = self.sign(Claims {
            sub: user_id,
            name: name.to_owned(),
            email: email.to_owned(),
            verified,
            iat: now.timestamp(),
            exp: access_expires_at.timestamp(),
            token_type: TokenType::Access,
        })?;
        let refresh_token = self.sign(Claims {
            sub: user_id,
            name: name.to_owned(),
            email: email.to_owned(),
            verified,
            iat: now.timestamp(),
            exp: refresh_expires_at.timestamp(),
            token_type: TokenType::Refresh,
        })?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    fn sign(&self, claims: Claims) -> Result<String, AppError> {
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {e}")))
    }
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
