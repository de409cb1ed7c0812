use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AdminUser;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Active or deleted account with this (lower-cased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, UserQueryError>;
}
