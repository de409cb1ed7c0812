pub mod asset_lifecycle;

pub use asset_lifecycle::{AssetLifecycle, AssetUploadError};
