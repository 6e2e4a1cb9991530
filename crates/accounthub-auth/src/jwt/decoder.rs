use jsonwebtoken::{DecodingKey, Validation};

use accounthub_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Validates bearer tokens against the configured HS256 secret.
///
/// Access and refresh tokens share one secret; the decoder checks
/// signature and expiry only. Revocation is the caller's concern and must
/// be checked before decoding so a revoked-but-expired token still reads
/// as a dead session rather than a merely stale one.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtDecoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Decode and validate a token, returning its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::TokenType;
    use crate::jwt::encoder::JwtEncoder;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".into(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_roundtrip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let pair = encoder
            .issue_pair(user_id, "Asha", "asha@example.com", true)
            .unwrap();

        let claims = decoder.decode(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "asha@example.com");
        assert!(claims.verified);
        assert_eq!(claims.token_type, TokenType::Access);

        let claims = decoder.decode(&pair.refresh_token).unwrap();
        assert_eq!(claims.token_type, TokenType::Refresh);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config());
        let other = AuthConfig {
            jwt_secret: "a-different-secret".into(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder
            .issue_pair(Uuid::new_v4(), "Asha", "asha@example.com", true)
            .unwrap();
        assert!(matches!(
            decoder.decode(&pair.access_token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(matches!(
            decoder.decode("not-a-jwt"),
            Err(AuthError::InvalidToken)
        ));
    }
}
