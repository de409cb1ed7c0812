use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::FileUpload;
use crate::shared::i18n::Bilingual;
use crate::shared::validation::{non_blank, FieldError, FieldValidator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub id: Uuid,
    pub title: Bilingual,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
}

/// Certificate editor submission. `issue_date` is an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Default)]
pub struct CertificateDraft {
    pub id: Option<Uuid>,
    pub title_es: String,
    pub title_en: String,
    pub issuer: String,
    pub issue_date: String,
    pub credential_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub image: Option<FileUpload>,
}

#[derive(Debug, Clone)]
pub struct ValidCertificate {
    pub id: Option<Uuid>,
    pub title: Bilingual,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub image: Option<FileUpload>,
}

/// Columns written by an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    pub id: Uuid,
    pub title: Bilingual,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
}

impl CertificateDraft {
    pub fn validate(self) -> Result<ValidCertificate, Vec<FieldError>> {
        let mut validator = FieldValidator::new();
        validator
            .required("title_es", &self.title_es)
            .required("title_en", &self.title_en)
            .required("issuer", &self.issuer)
            .optional_url("credential_url", self.credential_url.as_deref());

        let issue_date = NaiveDate::parse_from_str(self.issue_date.trim(), "%Y-%m-%d").ok();
        if issue_date.is_none() {
            validator.reject("issue_date", "Must be a date in YYYY-MM-DD format");
        }
        validator.finish()?;
        let issue_date = issue_date
            .ok_or_else(|| vec![FieldError::new("issue_date", "Must be a date in YYYY-MM-DD format")])?;

        Ok(ValidCertificate {
            id: self.id,
            title: Bilingual::new(non_blank(Some(self.title_es)), non_blank(Some(self.title_en))),
            issuer: self.issuer.trim().to_string(),
            issue_date,
            credential_url: non_blank(self.credential_url),
            category: non_blank(self.category),
            display_order: self.display_order,
            image: self.image,
        })
    }
}

impl ValidCertificate {
    pub fn into_record(self, id: Uuid, image_url: Option<String>) -> CertificateRecord {
        CertificateRecord {
            id,
            title: self.title,
            issuer: self.issuer,
            issue_date: self.issue_date,
            credential_url: self.credential_url,
            image_url,
            category: self.category,
            display_order: self.display_order,
        }
    }
}
