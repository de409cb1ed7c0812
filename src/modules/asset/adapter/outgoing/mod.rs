pub mod storage_http;
pub mod webp_compressor;

pub use storage_http::HttpAssetStore;
pub use webp_compressor::WebpImageCompressor;
