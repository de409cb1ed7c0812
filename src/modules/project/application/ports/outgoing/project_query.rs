use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectWithTechs;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every project with its technologies, by `display_order` then creation time.
    async fn list_with_techs(&self) -> Result<Vec<ProjectWithTechs>, ProjectQueryError>;
}
