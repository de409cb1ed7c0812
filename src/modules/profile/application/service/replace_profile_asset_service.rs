use async_trait::async_trait;
use tracing::info;

use crate::modules::asset::application::domain::entities::FileUpload;
use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::profile::application::domain::entities::{Profile, ProfileAsset};
use crate::modules::profile::application::ports::incoming::use_cases::ReplaceProfileAssetUseCase;
use crate::modules::profile::application::ports::outgoing::ProfileRepository;
use crate::shared::workflow::{EditorError, SaveStep};

use super::update_profile_service::map_profile_error;

/// LoadCurrent -> ResolveImage -> UpsertRecord -> CleanupOldImage.
pub struct ReplaceProfileAssetService<R>
where
    R: ProfileRepository,
{
    repository: R,
    assets: AssetLifecycle,
}

impl<R> ReplaceProfileAssetService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, assets: AssetLifecycle) -> Self {
        Self { repository, assets }
    }
}

#[async_trait]
impl<R> ReplaceProfileAssetUseCase for ReplaceProfileAssetService<R>
where
    R: ProfileRepository,
{
    async fn execute(
        &self,
        slot: ProfileAsset,
        upload: FileUpload,
    ) -> Result<Profile, EditorError> {
        let current = self
            .repository
            .get_singleton()
            .await
            .map_err(|e| map_profile_error(SaveStep::LoadCurrent, e))?;
        let old_url = slot.current_url(&current).map(str::to_string);

        let new_url = match slot {
            ProfileAsset::Avatar => {
                self.assets
                    .store_image(slot.asset_kind(), upload)
                    .await?
            }
            ProfileAsset::CvDocument => {
                self.assets
                    .store_document(slot.asset_kind(), upload)
                    .await?
            }
        };

        let updated = match self
            .repository
            .update_singleton(slot.change(new_url.clone()))
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                // Nothing references the fresh object yet
                self.assets.discard(&new_url).await;
                return Err(map_profile_error(SaveStep::UpsertRecord, e));
            }
        };

        let cleanup = self
            .assets
            .discard_replaced(old_url.as_deref(), Some(&new_url))
            .await;

        info!(
            asset = ?slot,
            url = %new_url,
            cleanup_failed = cleanup.is_failed(),
            "Profile asset replaced"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::in_memory::{
        pdf_upload, png_upload, sample_profile, InMemoryAssetStore, InMemoryProfileRepository,
    };

    fn service(
        repo: &InMemoryProfileRepository,
        store: &InMemoryAssetStore,
    ) -> ReplaceProfileAssetService<InMemoryProfileRepository> {
        ReplaceProfileAssetService::new(repo.clone(), store.lifecycle())
    }

    #[tokio::test]
    async fn new_avatar_replaces_and_removes_the_old_object() {
        let store = InMemoryAssetStore::default();
        let old_url = store.seed("uploads/avatar-old.webp");
        let repo = InMemoryProfileRepository::with_profile(Profile {
            avatar_url: Some(old_url.clone()),
            ..sample_profile()
        });

        let saved = service(&repo, &store)
            .execute(ProfileAsset::Avatar, png_upload("me.png"))
            .await
            .unwrap();

        let new_url = saved.avatar_url.unwrap();
        assert_ne!(new_url, old_url);
        assert!(store.contains_url(&new_url));
        assert!(!store.contains_url(&old_url));
        assert!(new_url.contains("/uploads/avatar-"));
    }

    #[tokio::test]
    async fn cv_must_be_a_pdf() {
        let store = InMemoryAssetStore::default();
        let repo = InMemoryProfileRepository::with_profile(sample_profile());

        let err = service(&repo, &store)
            .execute(ProfileAsset::CvDocument, png_upload("cv.png"))
            .await
            .unwrap_err();

        assert!(matches!(err, EditorError::UploadRejected(_)));
        assert_eq!(store.object_count(), 0);
    }

    #[tokio::test]
    async fn cv_upload_is_stored_as_is() {
        let store = InMemoryAssetStore::default();
        let repo = InMemoryProfileRepository::with_profile(sample_profile());

        let saved = service(&repo, &store)
            .execute(ProfileAsset::CvDocument, pdf_upload("cv.pdf"))
            .await
            .unwrap();

        let url = saved.cv_pdf_url.unwrap();
        assert!(url.ends_with(".pdf"));
        assert_eq!(store.content_type_of(&url).as_deref(), Some("application/pdf"));
    }

    #[tokio::test]
    async fn upload_failure_leaves_the_profile_untouched() {
        let store = InMemoryAssetStore::default();
        store.fail_uploads();
        let before = sample_profile();
        let repo = InMemoryProfileRepository::with_profile(before.clone());

        let err = service(&repo, &store)
            .execute(ProfileAsset::Avatar, png_upload("me.png"))
            .await
            .unwrap_err();

        assert!(matches!(err, EditorError::UploadFailed(_)));
        assert_eq!(repo.current().unwrap().avatar_url, before.avatar_url);
    }

    #[tokio::test]
    async fn cleanup_failure_still_reports_success() {
        let store = InMemoryAssetStore::default();
        let old_url = store.seed("uploads/avatar-old.webp");
        store.fail_deletes();
        let repo = InMemoryProfileRepository::with_profile(Profile {
            avatar_url: Some(old_url.clone()),
            ..sample_profile()
        });

        let saved = service(&repo, &store)
            .execute(ProfileAsset::Avatar, png_upload("me.png"))
            .await
            .unwrap();

        assert_ne!(saved.avatar_url.as_deref(), Some(old_url.as_str()));
        assert!(store.contains_url(&old_url));
    }

    #[tokio::test]
    async fn failed_record_write_discards_the_fresh_upload() {
        let store = InMemoryAssetStore::default();
        let repo = InMemoryProfileRepository::with_profile(sample_profile());
        repo.fail_updates_with("statement timeout");

        let err = service(&repo, &store)
            .execute(ProfileAsset::Avatar, png_upload("me.png"))
            .await
            .unwrap_err();

        assert_eq!(err, EditorError::store(SaveStep::UpsertRecord, "statement timeout"));
        assert_eq!(store.object_count(), 0);
    }
}
