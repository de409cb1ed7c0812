use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::asset::application::domain::entities::FileUpload;
use crate::shared::validation::FieldError;

/// A file selected in an editor form, sent inline as base64.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FilePayloadDto {
    #[schema(example = "screenshot.png")]
    pub file_name: String,
    #[schema(example = "image/png")]
    pub content_type: String,
    /// Standard base64, optionally prefixed with a `data:<mime>;base64,` header
    pub data_base64: String,
}

impl FilePayloadDto {
    pub fn decode(self, field: &str) -> Result<FileUpload, FieldError> {
        let raw = match self.data_base64.split_once(";base64,") {
            Some((prefix, data)) if prefix.starts_with("data:") => data,
            _ => self.data_base64.as_str(),
        };

        let bytes = STANDARD
            .decode(raw.trim())
            .map_err(|_| FieldError::new(field, "File content is not valid base64"))?;

        Ok(FileUpload::new(self.file_name, self.content_type, bytes))
    }
}
