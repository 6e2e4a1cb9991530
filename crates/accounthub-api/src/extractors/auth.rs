//! `AuthUser` extractor — the authentication guard for protected routes.
//!
//! Pulls the bearer token from the `Authorization` header or, failing
//! that, from a `token` query parameter. The revocation list is consulted
//! *before* the token is decoded, so a revoked token always reads as a
//! dead session even once it has also expired.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use accounthub_auth::error::AuthError;
use accounthub_auth::jwt::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Carries the decoded claims plus the exact token string that
/// authenticated the request, which logout needs verbatim.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub token: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or(AuthError::MissingToken)?;

        if state.engine.is_revoked(&token).await? {
            return Err(AuthError::SessionRevoked.into());
        }

        let claims = state.decoder.decode(&token)?;

        Ok(AuthUser { claims, token })
    }
}

/// Authorization header (with or without a `Bearer ` prefix), then the
/// `token` query parameter.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    {
        let token = header.strip_prefix("Bearer ").unwrap_or(header);
        if !token.is_empty() {
            return Some(token.to_owned());
        }
    }

    parts.uri.query().and_then(|query| {
        query.split('&').find_map(|pair| {
            pair.strip_prefix("token=")
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        })
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{Bytes, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use accounthub_auth::engine::AuthEngine;
    use accounthub_auth::jwt::{JwtDecoder, JwtEncoder};
    use accounthub_auth::password::PasswordHasher;
    use accounthub_core::AppResult;
    use accounthub_core::config::{AppConfig, AuthConfig};
    use accounthub_core::error::AppError;
    use accounthub_entity::store::{OtpStore, PasswordResetStore, RevocationStore, UserStore};
    use accounthub_entity::token::{OtpRecord, PasswordResetToken, RevokedToken};
    use accounthub_entity::user::{NewUser, ProfileUpdate, User};
    use accounthub_mailer::queue::MailQueue;
    use accounthub_mailer::sender::LogMailSender;

    use crate::uploads::{UploadKind, UploadStore};

    use super::*;

    fn parts_for(uri: &str, auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header("authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    struct NoUsers;

    #[async_trait]
    impl UserStore for NoUsers {
        async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<User>> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<User>> {
            Ok(None)
        }
        async fn create(&self, _data: &NewUser) -> AppResult<User> {
            Err(AppError::internal("not used"))
        }
        async fn set_verified(&self, _id: Uuid) -> AppResult<()> {
            Ok(())
        }
        async fn update_password(&self, _id: Uuid, _hash: &str) -> AppResult<()> {
            Ok(())
        }
        async fn update_profile(&self, _data: &ProfileUpdate) -> AppResult<User> {
            Err(AppError::internal("not used"))
        }
    }

    struct NoResets;

    #[async_trait]
    impl PasswordResetStore for NoResets {
        async fn find_by_token(&self, _token: &str) -> AppResult<Option<PasswordResetToken>> {
            Ok(None)
        }
        async fn find_by_user(&self, _user_id: Uuid) -> AppResult<Option<PasswordResetToken>> {
            Ok(None)
        }
        async fn insert(&self, _user_id: Uuid, _token: &str) -> AppResult<PasswordResetToken> {
            Err(AppError::internal("not used"))
        }
        async fn delete_by_user(&self, _user_id: Uuid) -> AppResult<u64> {
            Ok(0)
        }
    }

    struct NoOtps;

    #[async_trait]
    impl OtpStore for NoOtps {
        async fn find_by_user(&self, _user_id: Uuid) -> AppResult<Option<OtpRecord>> {
            Ok(None)
        }
        async fn find_by_user_and_code(
            &self,
            _user_id: Uuid,
            _otp: i32,
        ) -> AppResult<Option<OtpRecord>> {
            Ok(None)
        }
        async fn upsert(
            &self,
            _user_id: Uuid,
            _otp: i32,
            _issued_at: DateTime<Utc>,
        ) -> AppResult<OtpRecord> {
            Err(AppError::internal("not used"))
        }
        async fn delete_by_user(&self, _user_id: Uuid) -> AppResult<u64> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct RevocationList {
        revoked: Mutex<HashSet<String>>,
    }

    #[async_trait]
    impl RevocationStore for RevocationList {
        async fn insert(&self, token: &str) -> AppResult<RevokedToken> {
            self.revoked.lock().unwrap().insert(token.to_owned());
            Ok(RevokedToken {
                token: token.to_owned(),
                created_at: Utc::now(),
            })
        }
        async fn is_revoked(&self, token: &str) -> AppResult<bool> {
            Ok(self.revoked.lock().unwrap().contains(token))
        }
        async fn prune_older_than(&self, _cutoff: DateTime<Utc>) -> AppResult<u64> {
            Ok(0)
        }
    }

    struct NullUploads;

    #[async_trait]
    impl UploadStore for NullUploads {
        async fn save(
            &self,
            _kind: UploadKind,
            _original_name: &str,
            _bytes: Bytes,
        ) -> AppResult<String> {
            Ok("image/unused".to_string())
        }
        async fn delete(&self, _reference: &str) {}
    }

    fn secret_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "guard-test-secret".into(),
            ..AuthConfig::default()
        }
    }

    fn guard_state(revocations: Arc<RevocationList>) -> AppState {
        let auth = secret_config();
        let (mail, _dispatcher) = MailQueue::new(Arc::new(LogMailSender));
        let engine = AuthEngine::new(
            Arc::new(NoUsers),
            Arc::new(NoResets),
            Arc::new(NoOtps),
            revocations,
            PasswordHasher::new(),
            JwtEncoder::new(&auth),
            mail,
            auth.clone(),
            "http://127.0.0.1:9999",
        );

        AppState {
            config: Arc::new(AppConfig {
                server: Default::default(),
                database: Default::default(),
                auth: auth.clone(),
                mail: Default::default(),
                uploads: Default::default(),
                logging: Default::default(),
            }),
            engine,
            decoder: JwtDecoder::new(&auth),
            uploads: Arc::new(NullUploads),
        }
    }

    async fn rejection_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_guard_rejects_bare_request() {
        let state = guard_state(Arc::new(RevocationList::default()));
        let mut parts = parts_for("/profile", None);

        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        let (status, body) = rejection_parts(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn test_guard_accepts_live_token() {
        let state = guard_state(Arc::new(RevocationList::default()));
        let user_id = Uuid::new_v4();
        let pair = JwtEncoder::new(&secret_config())
            .issue_pair(user_id, "Asha", "asha@example.com", true)
            .unwrap();

        let mut parts = parts_for("/profile", Some(&format!("Bearer {}", pair.access_token)));
        let auth = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(auth.claims.sub, user_id);
        assert_eq!(auth.token, pair.access_token);
    }

    #[tokio::test]
    async fn test_guard_rejects_revoked_token_with_valid_signature() {
        let revocations = Arc::new(RevocationList::default());
        let state = guard_state(Arc::clone(&revocations));
        let pair = JwtEncoder::new(&secret_config())
            .issue_pair(Uuid::new_v4(), "Asha", "asha@example.com", true)
            .unwrap();
        revocations.insert(&pair.access_token).await.unwrap();

        let mut parts = parts_for("/profile", Some(&format!("Bearer {}", pair.access_token)));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        let (status, body) = rejection_parts(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "SESSION_EXPIRED");
    }

    #[tokio::test]
    async fn test_guard_checks_revocation_before_decoding() {
        // An undecodable revoked token still reads as a dead session, not
        // as a bad credential.
        let revocations = Arc::new(RevocationList::default());
        let state = guard_state(Arc::clone(&revocations));
        revocations.insert("not-a-jwt").await.unwrap();

        let mut parts = parts_for("/profile", Some("Bearer not-a-jwt"));
        let err = AuthUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        let (status, body) = rejection_parts(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "SESSION_EXPIRED");
    }

    #[test]
    fn test_bearer_header() {
        let parts = parts_for("/profile", Some("Bearer abc.def.ghi"));
        assert_eq!(extract_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bare_header() {
        let parts = parts_for("/profile", Some("abc.def.ghi"));
        assert_eq!(extract_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_query_fallback() {
        let parts = parts_for("/logout?token=abc.def.ghi", None);
        assert_eq!(extract_token(&parts).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_header_wins_over_query() {
        let parts = parts_for("/logout?token=from-query", Some("Bearer from-header"));
        assert_eq!(extract_token(&parts).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_missing_token() {
        let parts = parts_for("/profile", None);
        assert!(extract_token(&parts).is_none());
    }
}
