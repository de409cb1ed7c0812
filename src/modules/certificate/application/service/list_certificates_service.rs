use async_trait::async_trait;

use crate::modules::certificate::application::domain::entities::Certificate;
use crate::modules::certificate::application::ports::incoming::use_cases::{
    ListCertificatesError, ListCertificatesUseCase,
};
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;

pub struct ListCertificatesService<R>
where
    R: CertificateRepository,
{
    repository: R,
}

impl<R> ListCertificatesService<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCertificatesUseCase for ListCertificatesService<R>
where
    R: CertificateRepository,
{
    async fn execute(&self) -> Result<Vec<Certificate>, ListCertificatesError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListCertificatesError::RepositoryError(e.to_string()))
    }
}
