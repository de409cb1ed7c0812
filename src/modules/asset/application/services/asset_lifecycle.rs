use std::sync::Arc;
use tracing::{error, info};

use crate::modules::asset::application::domain::entities::{AssetKind, AssetPath, FileUpload};
use crate::modules::asset::application::domain::policies::{UploadPolicy, UploadRejected};
use crate::modules::asset::application::ports::outgoing::{
    AssetStore, AssetStoreError, ImageCompressor,
};
use crate::shared::workflow::{BestEffort, EditorError, SaveStep};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AssetUploadError {
    #[error(transparent)]
    Rejected(#[from] UploadRejected),

    #[error(transparent)]
    Store(#[from] AssetStoreError),
}

impl From<AssetUploadError> for EditorError {
    fn from(err: AssetUploadError) -> Self {
        match err {
            AssetUploadError::Rejected(reason) => EditorError::UploadRejected(reason.to_string()),
            AssetUploadError::Store(e) => EditorError::UploadFailed(e.to_string()),
        }
    }
}

/// Upload and cleanup of editor assets in one bucket.
#[derive(Clone)]
pub struct AssetLifecycle {
    store: Arc<dyn AssetStore>,
    compressor: Arc<dyn ImageCompressor>,
    bucket: String,
}

impl AssetLifecycle {
    pub fn new(
        store: Arc<dyn AssetStore>,
        compressor: Arc<dyn ImageCompressor>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            store,
            compressor,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Compress, then upload under a fresh unique path. Returns the public URL.
    pub async fn store_image(
        &self,
        kind: AssetKind,
        upload: FileUpload,
    ) -> Result<String, AssetUploadError> {
        UploadPolicy::image().check(&upload)?;

        let file_name = upload.file_name.clone();
        let compressed = self.compressor.compress(upload).await;
        let path = AssetPath::generate(kind, &compressed.content_type, &file_name);

        self.put(&path, compressed.bytes, &compressed.content_type)
            .await
    }

    /// Upload a document as-is after the CV policy check.
    pub async fn store_document(
        &self,
        kind: AssetKind,
        upload: FileUpload,
    ) -> Result<String, AssetUploadError> {
        UploadPolicy::cv_document().check(&upload)?;

        let path = AssetPath::generate(kind, &upload.content_type, &upload.file_name);
        let content_type = upload.content_type.clone();

        self.put(&path, upload.bytes, &content_type).await
    }

    async fn put(
        &self,
        path: &AssetPath,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AssetUploadError> {
        let size = bytes.len();
        match self
            .store
            .upload(&self.bucket, path, bytes, content_type)
            .await
        {
            Ok(url) => {
                info!(path = %path, size, "Asset uploaded");
                Ok(url)
            }
            Err(e) => {
                error!(path = %path, "Asset upload failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Removes the object behind `url`. Failures are logged, never raised.
    pub async fn discard(&self, url: &str) -> BestEffort {
        let Some(path) = AssetPath::from_public_url(url, &self.bucket) else {
            return BestEffort::Skipped.logged(SaveStep::CleanupOldImage, url);
        };

        match self.store.delete(&self.bucket, &path).await {
            Ok(()) => {
                info!(path = %path, "Old asset removed");
                BestEffort::Done
            }
            Err(e) => BestEffort::Failed(e.to_string()).logged(SaveStep::CleanupOldImage, url),
        }
    }

    /// Discards `old` only when it is set and differs from `current`.
    pub async fn discard_replaced(&self, old: Option<&str>, current: Option<&str>) -> BestEffort {
        match old {
            Some(old) if !old.is_empty() && Some(old) != current => self.discard(old).await,
            _ => BestEffort::Skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::asset::application::domain::entities::CompressedImage;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl AssetStore for Store {
            async fn upload(
                &self,
                bucket: &str,
                path: &AssetPath,
                bytes: Vec<u8>,
                content_type: &str,
            ) -> Result<String, AssetStoreError>;
            async fn delete(&self, bucket: &str, path: &AssetPath) -> Result<(), AssetStoreError>;
            fn public_url(&self, bucket: &str, path: &AssetPath) -> String;
        }
    }

    struct ToWebp;

    #[async_trait]
    impl ImageCompressor for ToWebp {
        async fn compress(&self, upload: FileUpload) -> CompressedImage {
            CompressedImage {
                content_type: "image/webp".to_string(),
                bytes: upload.bytes,
            }
        }
    }

    const BUCKET: &str = "portfolio-assets";

    fn lifecycle(store: MockStore) -> AssetLifecycle {
        AssetLifecycle::new(Arc::new(store), Arc::new(ToWebp), BUCKET)
    }

    #[tokio::test]
    async fn store_image_uploads_compressed_bytes_under_kind_directory() {
        let mut store = MockStore::new();
        store
            .expect_upload()
            .withf(|bucket, path, bytes, content_type| {
                bucket.to_string() == BUCKET
                    && path.as_str().starts_with("projects/")
                    && path.as_str().ends_with(".webp")
                    && *bytes == vec![9u8, 9]
                    && content_type.to_string() == "image/webp"
            })
            .times(1)
            .returning(|_, path, _, _| Ok(format!("https://cdn/{BUCKET}/{path}")));

        let url = lifecycle(store)
            .store_image(
                AssetKind::ProjectImage,
                FileUpload::new("shot.png", "image/png", vec![9, 9]),
            )
            .await
            .unwrap();

        assert!(url.contains("/portfolio-assets/projects/"));
    }

    #[tokio::test]
    async fn store_image_rejects_before_any_upload() {
        let mut store = MockStore::new();
        store.expect_upload().never();

        let result = lifecycle(store)
            .store_image(
                AssetKind::Avatar,
                FileUpload::new("cv.pdf", "application/pdf", vec![1]),
            )
            .await;

        assert!(matches!(result, Err(AssetUploadError::Rejected(_))));
    }

    #[tokio::test]
    async fn store_document_keeps_pdf_untouched() {
        let mut store = MockStore::new();
        store
            .expect_upload()
            .withf(|_, path, _, content_type| {
                path.as_str().starts_with("uploads/cv-")
                    && path.as_str().ends_with(".pdf")
                    && content_type.to_string() == "application/pdf"
            })
            .returning(|_, _, _, _| Ok("https://cdn/x.pdf".to_string()));

        let url = lifecycle(store)
            .store_document(
                AssetKind::CvDocument,
                FileUpload::new("me.pdf", "application/pdf", vec![b'%', b'P']),
            )
            .await
            .unwrap();

        assert_eq!(url, "https://cdn/x.pdf");
    }

    #[tokio::test]
    async fn discard_failure_is_reported_not_raised() {
        let mut store = MockStore::new();
        store
            .expect_delete()
            .withf(|bucket, path| bucket.to_string() == BUCKET && path.as_str() == "projects/old.webp")
            .returning(|_, _| Err(AssetStoreError::Unavailable("timeout".into())));

        let outcome = lifecycle(store)
            .discard("https://cdn/portfolio-assets/projects/old.webp")
            .await;

        assert!(outcome.is_failed());
    }

    #[tokio::test]
    async fn discard_skips_urls_outside_the_bucket() {
        let mut store = MockStore::new();
        store.expect_delete().never();

        let outcome = lifecycle(store).discard("https://gravatar.com/me.png").await;
        assert_eq!(outcome, BestEffort::Skipped);
    }

    #[tokio::test]
    async fn discard_replaced_leaves_unchanged_urls_alone() {
        let mut store = MockStore::new();
        store.expect_delete().never();
        let assets = lifecycle(store);

        let same = "https://cdn/portfolio-assets/projects/a.webp";
        assert_eq!(assets.discard_replaced(Some(same), Some(same)).await, BestEffort::Skipped);
        assert_eq!(assets.discard_replaced(None, Some(same)).await, BestEffort::Skipped);
    }
}
