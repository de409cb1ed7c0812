use crate::modules::asset::application::domain::entities::FileUpload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejected {
    #[error("File is empty")]
    Empty,

    #[error("File exceeds the {max_mib} MiB limit")]
    TooLarge { max_mib: u64 },

    #[error("File type '{0}' is not allowed")]
    UnsupportedType(String),

    #[error("File name is too long")]
    FileNameTooLong,
}

/// Size and type rules applied to an upload before any network call.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const IMAGE_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const CV_MIME_TYPES: &'static [&'static str] = &["application/pdf"];

    /// Editor images (project, certificate, avatar). Compressed afterwards.
    pub fn image() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024,
            max_file_name_len: 255,
            allowed_mime_types: Self::IMAGE_MIME_TYPES,
        }
    }

    /// The downloadable CV: PDF only, 5 MiB at most.
    pub fn cv_document() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_file_name_len: 255,
            allowed_mime_types: Self::CV_MIME_TYPES,
        }
    }

    pub fn check(&self, upload: &FileUpload) -> Result<(), UploadRejected> {
        if upload.bytes.is_empty() {
            return Err(UploadRejected::Empty);
        }

        if upload.file_name.chars().count() > self.max_file_name_len {
            return Err(UploadRejected::FileNameTooLong);
        }

        let essence = upload
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&essence.as_str()) {
            return Err(UploadRejected::UnsupportedType(upload.content_type.clone()));
        }

        if upload.bytes.len() as u64 > self.max_file_size_bytes {
            return Err(UploadRejected::TooLarge {
                max_mib: self.max_file_size_bytes / (1024 * 1024),
            });
        }

        Ok(())
    }
}
