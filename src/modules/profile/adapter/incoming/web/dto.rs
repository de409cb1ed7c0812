use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::asset::adapter::incoming::web::FilePayloadDto;
use crate::modules::profile::application::domain::entities::{Profile, ProfileForm};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Ana Torres")]
    pub full_name: String,
    pub role_title_es: Option<String>,
    pub role_title_en: Option<String>,
    pub about_me_es: Option<String>,
    pub about_me_en: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub contact_email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            full_name: p.full_name,
            role_title_es: p.role_title.es,
            role_title_en: p.role_title.en,
            about_me_es: p.about_me.es,
            about_me_en: p.about_me.en,
            avatar_url: p.avatar_url,
            cv_pdf_url: p.cv_pdf_url,
            contact_email: p.contact_email,
            github_url: p.github_url,
            linkedin_url: p.linkedin_url,
            whatsapp_url: p.whatsapp_url,
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role_title_es: String,
    #[serde(default)]
    pub role_title_en: String,
    #[serde(default)]
    pub about_me_es: String,
    #[serde(default)]
    pub about_me_en: String,
    #[serde(default)]
    pub contact_email: String,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileForm {
    fn from(r: UpdateProfileRequest) -> Self {
        Self {
            full_name: r.full_name,
            role_title_es: r.role_title_es,
            role_title_en: r.role_title_en,
            about_me_es: r.about_me_es,
            about_me_en: r.about_me_en,
            contact_email: r.contact_email,
            github_url: r.github_url,
            linkedin_url: r.linkedin_url,
            whatsapp_url: r.whatsapp_url,
        }
    }
}

/// Body of the avatar and CV replacement endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceAssetRequest {
    pub file: FilePayloadDto,
}
