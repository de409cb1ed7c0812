use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::AssetPath;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum AssetStoreError {
    #[error("Storage rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Storage is unreachable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// Binary objects in named buckets, each with a stable public URL.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores `bytes` at `path`, overwriting any existing object, and
    /// returns the object's public URL.
    async fn upload(
        &self,
        bucket: &str,
        path: &AssetPath,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AssetStoreError>;

    async fn delete(&self, bucket: &str, path: &AssetPath) -> Result<(), AssetStoreError>;

    /// Pure derivation, no I/O.
    fn public_url(&self, bucket: &str, path: &AssetPath) -> String;
}
