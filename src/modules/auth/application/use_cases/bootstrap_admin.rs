use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::ports::outgoing::{
    NewAdminUser, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::config::AdminBootstrap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    AlreadyPresent,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    #[error("Admin email is invalid")]
    InvalidEmail,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Ensures the configured admin account exists.
#[async_trait]
pub trait IBootstrapAdminUseCase: Send + Sync {
    async fn execute(&self, admin: AdminBootstrap) -> Result<BootstrapOutcome, BootstrapError>;
}

pub struct BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IBootstrapAdminUseCase for BootstrapAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, admin: AdminBootstrap) -> Result<BootstrapOutcome, BootstrapError> {
        let email = admin.email.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(BootstrapError::InvalidEmail);
        }

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| BootstrapError::DatabaseError(e.to_string()))?;
        if existing.is_some_and(|u| !u.is_deleted) {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&admin.password)
            .await
            .map_err(|e| BootstrapError::HashFailed(e.to_string()))?;

        match self
            .repository
            .create_user(NewAdminUser {
                email,
                password_hash,
                full_name: admin.full_name,
            })
            .await
        {
            Ok(user) => {
                info!(user_id = %user.id, "Admin account created");
                Ok(BootstrapOutcome::Created)
            }
            // Another instance won the race
            Err(UserRepositoryError::EmailAlreadyExists) => Ok(BootstrapOutcome::AlreadyPresent),
            Err(e) => Err(BootstrapError::DatabaseError(e.to_string())),
        }
    }
}
