use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::FileUpload;
use crate::shared::i18n::Bilingual;
use crate::shared::validation::{non_blank, FieldError, FieldValidator};

/// A portfolio project as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: Bilingual,
    pub description: Bilingual,
    pub content: Bilingual,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    /// Never empty
    pub image_url: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Technology linked to a project, as shown on its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedTech {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectWithTechs {
    pub project: Project,
    pub techs: Vec<LinkedTech>,
}

/// Project editor submission. `id` is set when editing.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub id: Option<Uuid>,
    pub title_es: String,
    pub title_en: String,
    pub description_es: String,
    pub description_en: String,
    pub content_es: String,
    pub content_en: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub tech_ids: Vec<Uuid>,
    pub image: Option<FileUpload>,
}

/// Validated draft: scalar fields, the distinct tech ids and the optional new image.
#[derive(Debug, Clone)]
pub struct ValidProject {
    pub id: Option<Uuid>,
    pub title: Bilingual,
    pub description: Bilingual,
    pub content: Bilingual,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub tech_ids: Vec<Uuid>,
    pub image: Option<FileUpload>,
}

impl ProjectDraft {
    pub fn validate(self) -> Result<ValidProject, Vec<FieldError>> {
        let mut validator = FieldValidator::new();
        validator
            .min_chars("title_es", &self.title_es, 5)
            .min_chars("title_en", &self.title_en, 5)
            .min_chars("description_es", &self.description_es, 10)
            .max_chars("description_es", &self.description_es, 150)
            .min_chars("description_en", &self.description_en, 10)
            .max_chars("description_en", &self.description_en, 150)
            .min_chars("content_es", &self.content_es, 20)
            .min_chars("content_en", &self.content_en, 20)
            .optional_url("live_url", self.live_url.as_deref())
            .optional_url("repo_url", self.repo_url.as_deref());

        if self.tech_ids.is_empty() {
            validator.reject("tech_ids", "Select at least one technology");
        }
        if self.id.is_none() && self.image.is_none() {
            validator.reject("image", "An image is required for a new project");
        }
        validator.finish()?;

        Ok(ValidProject {
            id: self.id,
            title: bilingual(self.title_es, self.title_en),
            description: bilingual(self.description_es, self.description_en),
            content: bilingual(self.content_es, self.content_en),
            live_url: non_blank(self.live_url),
            repo_url: non_blank(self.repo_url),
            is_featured: self.is_featured,
            display_order: self.display_order,
            tech_ids: distinct(self.tech_ids),
            image: self.image,
        })
    }
}

impl ValidProject {
    /// Row to upsert once the image URL is known.
    pub fn into_record(self, id: Uuid, image_url: String) -> (ProjectRecord, Vec<Uuid>) {
        let record = ProjectRecord {
            id,
            title: self.title,
            description: self.description,
            content: self.content,
            live_url: self.live_url,
            repo_url: self.repo_url,
            image_url,
            is_featured: self.is_featured,
            display_order: self.display_order,
        };
        (record, self.tech_ids)
    }
}

/// Scalar columns written by an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: Bilingual,
    pub description: Bilingual,
    pub content: Bilingual,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: String,
    pub is_featured: bool,
    pub display_order: i32,
}

fn bilingual(es: String, en: String) -> Bilingual {
    Bilingual::new(non_blank(Some(es)), non_blank(Some(en)))
}

/// First occurrence wins; order is kept.
pub fn distinct(ids: Vec<Uuid>) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
