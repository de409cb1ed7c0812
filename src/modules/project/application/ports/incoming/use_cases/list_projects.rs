use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectWithTechs;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectWithTechs>, ListProjectsError>;
}
