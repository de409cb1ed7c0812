use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::AssetKind;
use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::certificate::application::domain::entities::{
    Certificate, CertificateDraft,
};
use crate::modules::certificate::application::ports::incoming::use_cases::SaveCertificateUseCase;
use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::shared::workflow::{EditorError, SaveStep};

use super::map_certificate_error;

/// LoadCurrent -> ResolveImage -> UpsertRecord -> CleanupOldImage.
pub struct SaveCertificateService<R>
where
    R: CertificateRepository,
{
    repository: R,
    assets: AssetLifecycle,
}

impl<R> SaveCertificateService<R>
where
    R: CertificateRepository,
{
    pub fn new(repository: R, assets: AssetLifecycle) -> Self {
        Self { repository, assets }
    }
}

#[async_trait]
impl<R> SaveCertificateUseCase for SaveCertificateService<R>
where
    R: CertificateRepository,
{
    async fn execute(&self, draft: CertificateDraft) -> Result<Certificate, EditorError> {
        let mut valid = draft.validate().map_err(EditorError::Invalid)?;

        let current = match valid.id {
            Some(id) => Some(
                self.repository
                    .find_by_id(id)
                    .await
                    .map_err(|e| map_certificate_error(SaveStep::LoadCurrent, e))?
                    .ok_or(EditorError::NotFound("Certificate"))?,
            ),
            None => None,
        };
        let id = valid.id.unwrap_or_else(Uuid::new_v4);
        let old_url = current.as_ref().and_then(|c| c.image_url.clone());

        let fresh_url = match valid.image.take() {
            Some(upload) => Some(
                self.assets
                    .store_image(AssetKind::CertificateImage, upload)
                    .await?,
            ),
            None => None,
        };
        let image_url = fresh_url.clone().or_else(|| old_url.clone());

        let saved = match self.repository.upsert(valid.into_record(id, image_url)).await {
            Ok(saved) => saved,
            Err(e) => {
                error!(certificate_id = %id, step = %SaveStep::UpsertRecord, "Certificate upsert failed: {}", e);
                if let Some(url) = &fresh_url {
                    self.assets.discard(url).await;
                }
                return Err(map_certificate_error(SaveStep::UpsertRecord, e));
            }
        };

        let cleanup = self
            .assets
            .discard_replaced(old_url.as_deref(), saved.image_url.as_deref())
            .await;

        info!(
            certificate_id = %id,
            created = current.is_none(),
            cleanup_failed = cleanup.is_failed(),
            "Certificate saved"
        );
        Ok(saved)
    }
}
