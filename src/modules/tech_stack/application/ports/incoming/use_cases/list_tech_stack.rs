use async_trait::async_trait;

use crate::modules::tech_stack::application::domain::entities::TechStack;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListTechStackError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListTechStackUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<TechStack>, ListTechStackError>;
}
