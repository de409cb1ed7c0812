use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::asset::application::domain::entities::AssetKind;
use crate::shared::i18n::Bilingual;
use crate::shared::validation::{non_blank, FieldError, FieldValidator};

/// The site owner's profile. There is exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub full_name: String,
    pub role_title: Bilingual,
    pub about_me: Bilingual,
    pub avatar_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub contact_email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Raw profile form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub full_name: String,
    pub role_title_es: String,
    pub role_title_en: String,
    pub about_me_es: String,
    pub about_me_en: String,
    pub contact_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
}

/// Validated scalar fields of the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub full_name: String,
    pub role_title: Bilingual,
    pub about_me: Bilingual,
    pub contact_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
}

impl ProfileForm {
    pub fn validate(self) -> Result<ProfileDetails, Vec<FieldError>> {
        FieldValidator::new()
            .min_chars("full_name", &self.full_name, 3)
            .min_chars("role_title_es", &self.role_title_es, 5)
            .min_chars("role_title_en", &self.role_title_en, 5)
            .min_chars("about_me_es", &self.about_me_es, 20)
            .min_chars("about_me_en", &self.about_me_en, 20)
            .email("contact_email", &self.contact_email)
            .optional_url("github_url", self.github_url.as_deref())
            .optional_url("linkedin_url", self.linkedin_url.as_deref())
            .optional_url("whatsapp_url", self.whatsapp_url.as_deref())
            .finish()?;

        Ok(ProfileDetails {
            full_name: self.full_name.trim().to_string(),
            role_title: Bilingual::new(
                non_blank(Some(self.role_title_es)),
                non_blank(Some(self.role_title_en)),
            ),
            about_me: Bilingual::new(
                non_blank(Some(self.about_me_es)),
                non_blank(Some(self.about_me_en)),
            ),
            contact_email: self.contact_email.trim().to_string(),
            github_url: non_blank(self.github_url),
            linkedin_url: non_blank(self.linkedin_url),
            whatsapp_url: non_blank(self.whatsapp_url),
        })
    }
}

/// One write against the profile singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChange {
    Details(ProfileDetails),
    AvatarUrl(String),
    CvPdfUrl(String),
}

/// Binary assets hanging off the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAsset {
    Avatar,
    CvDocument,
}

impl ProfileAsset {
    pub fn asset_kind(&self) -> AssetKind {
        match self {
            ProfileAsset::Avatar => AssetKind::Avatar,
            ProfileAsset::CvDocument => AssetKind::CvDocument,
        }
    }

    pub fn current_url<'a>(&self, profile: &'a Profile) -> Option<&'a str> {
        match self {
            ProfileAsset::Avatar => profile.avatar_url.as_deref(),
            ProfileAsset::CvDocument => profile.cv_pdf_url.as_deref(),
        }
    }

    pub fn change(&self, url: String) -> ProfileChange {
        match self {
            ProfileAsset::Avatar => ProfileChange::AvatarUrl(url),
            ProfileAsset::CvDocument => ProfileChange::CvPdfUrl(url),
        }
    }
}
