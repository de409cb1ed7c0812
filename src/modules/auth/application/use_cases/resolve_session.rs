use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::{debug, warn};

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::modules::auth::application::ports::outgoing::{
    token_provider::SESSION_TOKEN_TYPE, TokenProvider, TokenRepository,
};
use crate::modules::auth::application::services::hash_token;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Session refresh failed: {0}")]
    RefreshFailed(String),
}

/// Turns a session cookie value into a session, or `None` when the
/// token is invalid, expired or revoked.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<AdminSession>, SessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> ResolveSessionUseCase<R>
where
    R: TokenRepository,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> SessionResolver for ResolveSessionUseCase<R>
where
    R: TokenRepository,
{
    async fn resolve(&self, token: &str) -> Result<Option<AdminSession>, SessionError> {
        let claims = match self.token_provider.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("Session cookie rejected: {}", e);
                return Ok(None);
            }
        };

        if claims.token_type != SESSION_TOKEN_TYPE {
            warn!(token_type = %claims.token_type, "Session cookie carries a non-session token");
            return Ok(None);
        }

        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(token))
            .await
            .map_err(|e| SessionError::StoreUnavailable(e.to_string()))?;
        if revoked {
            debug!(user_id = %claims.sub, "Session cookie was revoked");
            return Ok(None);
        }

        let Some(expires_at) = Utc.timestamp_opt(claims.exp, 0).single() else {
            return Ok(None);
        };

        // Keep-alive: re-issue once less than half the lifetime remains.
        // The superseded token is revoked first so only one stays live.
        let remaining = (expires_at - Utc::now()).num_seconds();
        let refreshed = if remaining < self.token_provider.session_lifetime_secs() / 2 {
            let issued = self
                .token_provider
                .generate_session_token(claims.sub)
                .map_err(|e| SessionError::RefreshFailed(e.to_string()))?;
            match self
                .token_repository
                .blacklist_token(hash_token(token), claims.sub, expires_at)
                .await
            {
                Ok(()) => {
                    debug!(user_id = %claims.sub, "Session token refreshed");
                    Some(issued)
                }
                Err(e) => {
                    warn!(user_id = %claims.sub, "Keeping current session token, revocation failed: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Some(AdminSession {
            user_id: claims.sub,
            expires_at,
            refreshed,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{FixedTokenProvider, InMemoryTokenRepository};
    use uuid::Uuid;

    #[tokio::test]
    async fn fresh_token_resolves_without_refresh() {
        let tokens = Arc::new(FixedTokenProvider::default());
        let user_id = Uuid::new_v4();
        let issued = tokens.generate_session_token(user_id).unwrap();

        let session = ResolveSessionUseCase::new(InMemoryTokenRepository::default(), tokens)
            .resolve(&issued.token)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(session.user_id, user_id);
        assert!(session.refreshed.is_none());
    }

    #[tokio::test]
    async fn garbage_and_revoked_tokens_resolve_to_none() {
        let tokens = Arc::new(FixedTokenProvider::default());
        let repo = InMemoryTokenRepository::default();
        let issued = tokens.generate_session_token(Uuid::new_v4()).unwrap();
        repo.blacklist_token(hash_token(&issued.token), Uuid::new_v4(), issued.expires_at)
            .await
            .unwrap();

        let resolver = ResolveSessionUseCase::new(repo, tokens);

        assert!(resolver.resolve("not-a-jwt").await.unwrap().is_none());
        assert!(resolver.resolve(&issued.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn token_past_half_life_is_reissued() {
        // Issued with 100s but provider now hands out 1000s sessions
        let short = FixedTokenProvider::with_lifetime(100);
        let issued = short.generate_session_token(Uuid::new_v4()).unwrap();

        let resolver = ResolveSessionUseCase::new(
            InMemoryTokenRepository::default(),
            Arc::new(FixedTokenProvider::with_lifetime(1000)),
        );

        let session = resolver.resolve(&issued.token).await.unwrap().unwrap();
        let refreshed = session.refreshed.expect("token should be refreshed");
        assert!(refreshed.expires_at > issued.expires_at);
    }

    #[tokio::test]
    async fn reissue_revokes_the_superseded_token() {
        let short = FixedTokenProvider::with_lifetime(100);
        let user_id = Uuid::new_v4();
        let old = short.generate_session_token(user_id).unwrap();
        let repo = InMemoryTokenRepository::default();

        let resolver = ResolveSessionUseCase::new(
            repo.clone(),
            Arc::new(FixedTokenProvider::with_lifetime(1000)),
        );

        let session = resolver.resolve(&old.token).await.unwrap().unwrap();
        let fresh = session.refreshed.expect("token should be refreshed");
        assert_eq!(repo.len(), 1);

        // The old cookie no longer opens a session; the new one does.
        assert!(resolver.resolve(&old.token).await.unwrap().is_none());
        let current = resolver.resolve(&fresh.token).await.unwrap().unwrap();
        assert_eq!(current.user_id, user_id);
        assert!(current.refreshed.is_none());
    }

    #[tokio::test]
    async fn unreachable_revocation_store_is_an_error() {
        let tokens = Arc::new(FixedTokenProvider::default());
        let issued = tokens.generate_session_token(Uuid::new_v4()).unwrap();

        let err = ResolveSessionUseCase::new(InMemoryTokenRepository::failing(), tokens)
            .resolve(&issued.token)
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::StoreUnavailable(_)));
    }
}
