use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::certificate::application::ports::incoming::use_cases::DeleteCertificateUseCase;
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::shared::workflow::{BestEffort, EditorError, SaveStep};

use super::map_certificate_error;

pub struct DeleteCertificateService<R>
where
    R: CertificateRepository,
{
    repository: R,
    assets: AssetLifecycle,
}

impl<R> DeleteCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R, assets: AssetLifecycle) -> Self {
        Self { repository, assets }
    }
}

#[async_trait]
impl<R> DeleteCertificateUseCase for DeleteCertificateService<R>
where
    R: CertificateRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), EditorError> {
        let certificate = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|e| map_certificate_error(SaveStep::LoadCurrent, e))?
            .ok_or(EditorError::NotFound("Certificate"))?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_certificate_error(SaveStep::DeleteRecord, e))?;

        let cleanup = match certificate.image_url.as_deref() {
            Some(url) => self.assets.discard(url).await,
            None => BestEffort::Skipped,
        };
        info!(certificate_id = %id, cleanup_failed = cleanup.is_failed(), "Certificate deleted");
        Ok(())
    }
}
