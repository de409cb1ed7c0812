use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::certificate::application::domain::entities::{
    Certificate, CertificateRecord,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Certificate not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    /// Most recent `issue_date` first.
    async fn list(&self) -> Result<Vec<Certificate>, CertificateRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, CertificateRepositoryError>;

    async fn upsert(
        &self,
        record: CertificateRecord,
    ) -> Result<Certificate, CertificateRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
