use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::{CompressedImage, FileUpload};
use crate::modules::asset::application::ports::outgoing::ImageCompressor;
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::domain::entities::{AdminUser, IssuedToken};
use crate::modules::auth::application::ports::outgoing::{
    HashError, NewAdminUser, PasswordHasher, TokenClaims, TokenError, TokenProvider,
    TokenRepository, TokenRepositoryError, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

// ============================================================================
// Tokens
// ============================================================================

const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

/// Real JWT signing with a fixed secret, so tokens from one instance
/// verify on any other.
pub struct FixedTokenProvider(JwtTokenService);

impl FixedTokenProvider {
    pub fn with_lifetime(secs: i64) -> Self {
        Self(JwtTokenService::new(JwtConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            issuer: JwtConfig::DEFAULT_ISSUER.to_string(),
            session_token_expiry: secs,
        }))
    }
}

impl Default for FixedTokenProvider {
    fn default() -> Self {
        Self::with_lifetime(3600)
    }
}

impl TokenProvider for FixedTokenProvider {
    fn generate_session_token(&self, user_id: Uuid) -> Result<IssuedToken, TokenError> {
        self.0.generate_session_token(user_id)
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.0.verify_token(token)
    }

    fn session_lifetime_secs(&self) -> i64 {
        self.0.session_lifetime_secs()
    }
}

/// Revocation list kept in memory.
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    revoked: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    failing: bool,
}

impl InMemoryTokenRepository {
    /// Every call fails as if the store were unreachable.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.revoked.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), TokenRepositoryError> {
        if self.failing {
            return Err(TokenRepositoryError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        _user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        self.check()?;
        self.revoked.lock().unwrap().insert(token_hash, expires_at);
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        self.check()?;
        Ok(self.revoked.lock().unwrap().contains_key(token_hash))
    }
}

// ============================================================================
// Accounts
// ============================================================================

pub fn admin_user(email: &str) -> AdminUser {
    AdminUser {
        id: Uuid::new_v4(),
        email: email.to_string(),
        full_name: "Site Owner".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        is_deleted: false,
        created_at: Utc::now(),
    }
}

/// Hashes by prefixing; verification answers with a fixed verdict.
pub struct StubPasswordHasher {
    verdict: bool,
}

impl StubPasswordHasher {
    pub fn verifying(verdict: bool) -> Self {
        Self { verdict }
    }
}

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Ok(self.verdict)
    }
}

#[derive(Clone)]
pub struct StubUserQuery {
    user: Option<AdminUser>,
}

impl StubUserQuery {
    pub fn with_user(user: AdminUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn empty() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, UserQueryError> {
        Ok(self.user.clone().filter(|u| u.email == email))
    }
}

/// Records every account it is asked to create.
#[derive(Clone, Default)]
pub struct StubUserRepository {
    created: Arc<Mutex<Vec<NewAdminUser>>>,
}

impl StubUserRepository {
    pub fn created_emails(&self) -> Vec<String> {
        self.created
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.email.clone())
            .collect()
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn create_user(&self, user: NewAdminUser) -> Result<AdminUser, UserRepositoryError> {
        let created = AdminUser {
            id: Uuid::new_v4(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            password_hash: user.password_hash.clone(),
            is_deleted: false,
            created_at: Utc::now(),
        };
        self.created.lock().unwrap().push(user);
        Ok(created)
    }
}

// ============================================================================
// Assets
// ============================================================================

/// Hands images back untouched.
pub struct PassthroughCompressor;

#[async_trait]
impl ImageCompressor for PassthroughCompressor {
    async fn compress(&self, upload: FileUpload) -> CompressedImage {
        CompressedImage {
            content_type: upload.content_type,
            bytes: upload.bytes,
        }
    }
}
