use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::{debug, info};

use crate::modules::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError,
};
use crate::modules::auth::application::services::hash_token;

// ====================== Logout Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        LogoutError::TokenRevocationFailed(error.to_string())
    }
}

// ============================ Logout Use Case =============================
#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    /// Revokes the session token, if there is a live one.
    async fn execute(&self, session_token: Option<String>) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutAdminUseCase<R>
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
impl<R> ILogoutAdminUseCase for LogoutAdminUseCase<R>
where
    R: TokenRepository,
{
    async fn execute(&self, session_token: Option<String>) -> Result<(), LogoutError> {
        let Some(token) = session_token.filter(|t| !t.trim().is_empty()) else {
            debug!("Logout without a session cookie");
            return Ok(());
        };

        // Expired or forged tokens need no revocation
        let Ok(claims) = self.token_provider.verify_token(&token) else {
            return Ok(());
        };

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(LogoutError::TokenRevocationFailed(
                "Token expiry out of range".to_string(),
            ))?;

        match self
            .token_repository
            .blacklist_token(hash_token(&token), claims.sub, expires_at)
            .await
        {
            Ok(()) => {
                info!(user_id = %claims.sub, "Session revoked");
                Ok(())
            }
            // Already past its expiry: nothing left to revoke
            Err(TokenRepositoryError::InvalidToken) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
