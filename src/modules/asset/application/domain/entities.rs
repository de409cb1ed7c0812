use std::fmt;
use url::Url;
use uuid::Uuid;

/// Decoded file as received from an editor form.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Lower-cased extension of the original file name, if any.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.file_name)
    }
}

/// Output of the image compressor. May be the untouched input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What an object is for; decides its directory and file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    ProjectImage,
    CertificateImage,
    Avatar,
    CvDocument,
}

impl AssetKind {
    pub fn directory(&self) -> &'static str {
        match self {
            AssetKind::ProjectImage => "projects",
            AssetKind::CertificateImage => "certificates",
            AssetKind::Avatar | AssetKind::CvDocument => "uploads",
        }
    }

    fn stem(&self, id: Uuid) -> String {
        match self {
            AssetKind::ProjectImage | AssetKind::CertificateImage => id.to_string(),
            AssetKind::Avatar => format!("avatar-{id}"),
            AssetKind::CvDocument => format!("cv-{id}"),
        }
    }
}

/// Object key inside a bucket, e.g. `projects/<uuid>.webp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPath(String);

impl AssetPath {
    pub const FALLBACK_EXTENSION: &'static str = "webp";

    /// Fresh unique path. The extension comes from the (compressed)
    /// content type, then the original file name, then `webp`.
    pub fn generate(kind: AssetKind, content_type: &str, original_name: &str) -> Self {
        Self::generate_with_id(kind, Uuid::new_v4(), content_type, original_name)
    }

    pub(crate) fn generate_with_id(
        kind: AssetKind,
        id: Uuid,
        content_type: &str,
        original_name: &str,
    ) -> Self {
        let ext = extension_from_content_type(content_type)
            .or_else(|| extension_of(original_name))
            .unwrap_or_else(|| Self::FALLBACK_EXTENSION.to_string());

        AssetPath(format!("{}/{}.{}", kind.directory(), kind.stem(id), ext))
    }

    /// Recovers the object key from a public URL of `bucket`.
    ///
    /// Returns `None` when the URL does not parse or its path does not
    /// point into that bucket. Query and fragment are never searched.
    pub fn from_public_url(url: &str, bucket: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let marker = format!("/{bucket}/");
        let (_, path) = parsed.path().split_once(&marker)?;

        if path.is_empty() {
            return None;
        }
        Some(AssetPath(path.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn extension_from_content_type(content_type: &str) -> Option<String> {
    let essence = content_type.split(';').next()?.trim();
    let (_, subtype) = essence.split_once('/')?;
    let subtype = subtype.trim().to_ascii_lowercase();

    match subtype.as_str() {
        "" => None,
        "jpeg" | "pjpeg" => Some("jpg".to_string()),
        "svg+xml" => Some("svg".to_string()),
        // Generic binary says nothing about the format
        "octet-stream" => None,
        other => Some(other.to_string()),
    }
}
