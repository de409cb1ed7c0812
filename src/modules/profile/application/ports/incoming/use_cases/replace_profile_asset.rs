use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::FileUpload;
use crate::modules::profile::application::domain::entities::{Profile, ProfileAsset};
use crate::shared::workflow::EditorError;

/// Swap the avatar or CV for a newly uploaded file.
#[async_trait]
pub trait ReplaceProfileAssetUseCase: Send + Sync {
    async fn execute(&self, slot: ProfileAsset, upload: FileUpload)
        -> Result<Profile, EditorError>;
}
