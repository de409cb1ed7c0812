use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError>;

    /// Insert, or overwrite every scalar column of the row with this id.
    async fn upsert(&self, record: ProjectRecord) -> Result<Project, ProjectRepositoryError>;

    /// Fails while join rows still point at the project.
    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
