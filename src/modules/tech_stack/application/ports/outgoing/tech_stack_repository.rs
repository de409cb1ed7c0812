use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{TechRecord, TechStack};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TechStackRepositoryError {
    #[error("Technology not found")]
    NotFound,

    /// The store refused the delete because projects still link to the row.
    #[error("Technology is still referenced")]
    StillReferenced,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TechStackRepository: Send + Sync {
    /// Ordered by category, then name.
    async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError>;

    async fn upsert(&self, record: TechRecord) -> Result<TechStack, TechStackRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TechStackRepositoryError>;
}
