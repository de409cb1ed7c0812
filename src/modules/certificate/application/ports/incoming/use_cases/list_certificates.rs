use async_trait::async_trait;

use crate::modules::certificate::application::domain::entities::Certificate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListCertificatesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCertificatesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Certificate>, ListCertificatesError>;
}
