use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::{CompressedImage, FileUpload};

/// Shrinks editor images before upload.
///
/// Infallible: an image that cannot be processed comes back unchanged.
#[async_trait]
pub trait ImageCompressor: Send + Sync {
    async fn compress(&self, upload: FileUpload) -> CompressedImage;
}
