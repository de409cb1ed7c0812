pub mod asset_store;
pub mod image_compressor;

pub use asset_store::{AssetStore, AssetStoreError};
pub use image_compressor::ImageCompressor;
