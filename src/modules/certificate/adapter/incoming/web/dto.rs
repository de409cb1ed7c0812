use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::asset::adapter::incoming::web::FilePayloadDto;
use crate::modules::certificate::application::domain::entities::{Certificate, CertificateDraft};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CertificateResponse {
    pub id: Uuid,
    pub title_es: Option<String>,
    pub title_en: Option<String>,
    #[schema(example = "Amazon Web Services")]
    pub issuer: String,
    #[schema(value_type = String, example = "2024-03-15")]
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
}

impl From<Certificate> for CertificateResponse {
    fn from(c: Certificate) -> Self {
        Self {
            id: c.id,
            title_es: c.title.es,
            title_en: c.title.en,
            issuer: c.issuer,
            issue_date: c.issue_date,
            credential_url: c.credential_url,
            image_url: c.image_url,
            category: c.category,
            display_order: c.display_order,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CertificateRequest {
    #[serde(default)]
    pub title_es: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    #[schema(example = "2024-03-15")]
    pub issue_date: String,
    pub credential_url: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    /// Optional; omit to keep the current image
    pub image: Option<FilePayloadDto>,
}

impl CertificateRequest {
    pub fn into_draft(self, id: Option<Uuid>) -> Result<CertificateDraft, FieldError> {
        let image = self.image.map(|f| f.decode("image")).transpose()?;

        Ok(CertificateDraft {
            id,
            title_es: self.title_es,
            title_en: self.title_en,
            issuer: self.issuer,
            issue_date: self.issue_date,
            credential_url: self.credential_url,
            category: self.category,
            display_order: self.display_order,
            image,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CertificateSaveResponse {
    pub saved: CertificateResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<CertificateResponse>>,
}
