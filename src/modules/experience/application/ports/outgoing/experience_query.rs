use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceLog;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Most recent `start_date` first.
    async fn list(&self) -> Result<Vec<ExperienceLog>, ExperienceQueryError>;
}
