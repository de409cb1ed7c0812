use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceLog;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListExperienceError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceLog>, ListExperienceError>;
}
