use async_trait::async_trait;
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tracing::{debug, warn};

use crate::modules::asset::application::domain::entities::{CompressedImage, FileUpload};
use crate::modules::asset::application::ports::outgoing::ImageCompressor;

const WEBP_CONTENT_TYPE: &str = "image/webp";

/// Fits images within a square bound and re-encodes them as lossy WebP.
#[derive(Debug, Clone)]
pub struct WebpImageCompressor {
    max_dimension_px: u32,
    quality: f32,
}

impl Default for WebpImageCompressor {
    fn default() -> Self {
        Self {
            max_dimension_px: 1200,
            quality: 80.0,
        }
    }
}

impl WebpImageCompressor {
    pub fn new(max_dimension_px: u32, quality: f32) -> Self {
        Self {
            max_dimension_px,
            quality,
        }
    }

    fn encode(&self, bytes: &[u8]) -> Result<Vec<u8>, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let img = self.fit(img);
        let (width, height) = img.dimensions();

        let encoded = match img {
            DynamicImage::ImageRgb8(rgb) => {
                webp::Encoder::from_rgb(rgb.as_raw(), width, height).encode(self.quality)
            }
            other => {
                let rgba = other.to_rgba8();
                webp::Encoder::from_rgba(rgba.as_raw(), width, height).encode(self.quality)
            }
        };

        Ok(encoded.to_vec())
    }

    fn fit(&self, img: DynamicImage) -> DynamicImage {
        let (width, height) = img.dimensions();
        if width <= self.max_dimension_px && height <= self.max_dimension_px {
            return img;
        }
        img.resize(self.max_dimension_px, self.max_dimension_px, FilterType::Triangle)
    }
}

#[async_trait]
impl ImageCompressor for WebpImageCompressor {
    async fn compress(&self, upload: FileUpload) -> CompressedImage {
        let this = self.clone();
        let input = upload.bytes.clone();

        // Decoding and encoding are CPU-bound
        let result = tokio::task::spawn_blocking(move || this.encode(&input))
            .await
            .map_err(|e| e.to_string())
            .and_then(|r| r);

        match result {
            Ok(webp) if webp.len() < upload.bytes.len() => {
                debug!(
                    file_name = %upload.file_name,
                    before = upload.bytes.len(),
                    after = webp.len(),
                    "Image compressed"
                );
                CompressedImage {
                    content_type: WEBP_CONTENT_TYPE.to_string(),
                    bytes: webp,
                }
            }
            Ok(_) => CompressedImage {
                content_type: upload.content_type,
                bytes: upload.bytes,
            },
            Err(reason) => {
                warn!(file_name = %upload.file_name, reason = %reason, "Image compression failed, uploading original");
                CompressedImage {
                    content_type: upload.content_type,
                    bytes: upload.bytes,
                }
            }
        }
    }
}
