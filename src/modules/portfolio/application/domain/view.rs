use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::certificate::application::domain::entities::Certificate;
use crate::modules::experience::application::domain::entities::ExperienceLog;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::project::application::domain::entities::ProjectWithTechs;
use crate::modules::tech_stack::application::domain::entities::{TechCategory, TechStack};
use crate::shared::i18n::Lang;

use super::entities::PortfolioSnapshot;
use super::metadata::PageMetadata;

/// Text shown when a field is missing in both languages.
pub const MISSING_TEXT: &str = "UNDEFINED";

struct Fallbacks {
    role: &'static str,
    about: &'static str,
}

impl Fallbacks {
    fn for_lang(lang: Lang) -> Self {
        match lang {
            Lang::Es => Self {
                role: "Rol sin asignar",
                about: "Sin telemetria disponible.",
            },
            Lang::En => Self {
                role: "Role offline",
                about: "No telemetry available.",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedProfile {
    pub full_name: String,
    pub role_title: String,
    pub about_me: String,
    pub avatar_url: Option<String>,
    pub cv_pdf_url: Option<String>,
    pub contact_email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedProject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
    pub techs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedExperience {
    pub id: Uuid,
    pub company_name: String,
    pub role: String,
    pub description: String,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedCertificate {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub credential_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechItem {
    pub id: Uuid,
    pub name: String,
    pub icon_slug: String,
}

/// Technologies of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechGroup {
    pub category: TechCategory,
    pub items: Vec<TechItem>,
}

/// The whole public page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub lang: Lang,
    pub metadata: PageMetadata,
    pub profile: Option<LocalizedProfile>,
    pub projects: Vec<LocalizedProject>,
    pub experience: Vec<LocalizedExperience>,
    pub certificates: Vec<LocalizedCertificate>,
    pub tech_stack: Vec<TechGroup>,
}

impl PortfolioView {
    pub fn localize(snapshot: PortfolioSnapshot, lang: Lang) -> Self {
        let fallbacks = Fallbacks::for_lang(lang);
        let metadata = PageMetadata::for_profile(snapshot.profile.as_ref());

        Self {
            lang,
            metadata,
            profile: snapshot
                .profile
                .map(|p| localize_profile(p, lang, &fallbacks)),
            projects: snapshot
                .projects
                .into_iter()
                .map(|p| localize_project(p, lang))
                .collect(),
            experience: snapshot
                .experience
                .into_iter()
                .map(|e| localize_experience(e, lang))
                .collect(),
            certificates: snapshot
                .certificates
                .into_iter()
                .map(|c| localize_certificate(c, lang))
                .collect(),
            tech_stack: group_by_category(snapshot.tech_stack),
        }
    }
}

fn localize_profile(profile: Profile, lang: Lang, fallbacks: &Fallbacks) -> LocalizedProfile {
    let full_name = match profile.full_name.trim() {
        "" => MISSING_TEXT.to_string(),
        name => name.to_string(),
    };

    LocalizedProfile {
        full_name,
        role_title: profile.role_title.localize(lang, fallbacks.role),
        about_me: profile.about_me.localize(lang, fallbacks.about),
        avatar_url: profile.avatar_url,
        cv_pdf_url: profile.cv_pdf_url,
        contact_email: profile.contact_email,
        github_url: profile.github_url,
        linkedin_url: profile.linkedin_url,
        whatsapp_url: profile.whatsapp_url,
        updated_at: profile.updated_at,
    }
}

fn localize_project(item: ProjectWithTechs, lang: Lang) -> LocalizedProject {
    let p = item.project;
    LocalizedProject {
        id: p.id,
        title: p.title.localize(lang, MISSING_TEXT),
        description: p.description.localize(lang, MISSING_TEXT),
        content: p.content.localize(lang, MISSING_TEXT),
        image_url: p.image_url,
        live_url: p.live_url,
        repo_url: p.repo_url,
        is_featured: p.is_featured,
        techs: item.techs.into_iter().map(|t| t.name).collect(),
    }
}

fn localize_experience(log: ExperienceLog, lang: Lang) -> LocalizedExperience {
    LocalizedExperience {
        id: log.id,
        company_name: log.company_name,
        role: log.role.localize(lang, MISSING_TEXT),
        description: log.description.localize(lang, MISSING_TEXT),
        start_date: log.start_date,
    }
}

fn localize_certificate(cert: Certificate, lang: Lang) -> LocalizedCertificate {
    LocalizedCertificate {
        id: cert.id,
        title: cert.title.localize(lang, MISSING_TEXT),
        issuer: cert.issuer,
        issue_date: cert.issue_date,
        credential_url: cert.credential_url,
        image_url: cert.image_url,
        category: cert.category,
    }
}

fn group_by_category(techs: Vec<TechStack>) -> Vec<TechGroup> {
    let mut groups: Vec<TechGroup> = Vec::new();
    for tech in techs {
        let item = TechItem {
            id: tech.id,
            name: tech.name,
            icon_slug: tech.icon_slug,
        };
        match groups.iter_mut().find(|g| g.category == tech.category) {
            Some(group) => group.items.push(item),
            None => groups.push(TechGroup {
                category: tech.category,
                items: vec![item],
            }),
        }
    }
    groups.sort_by_key(|g| g.category);
    groups
}
