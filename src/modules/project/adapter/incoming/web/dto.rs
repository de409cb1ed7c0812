use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::asset::adapter::incoming::web::FilePayloadDto;
use crate::modules::project::application::domain::entities::{
    LinkedTech, Project, ProjectDraft, ProjectWithTechs,
};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinkedTechResponse {
    pub id: Uuid,
    #[schema(example = "Rust")]
    pub name: String,
}

impl From<LinkedTech> for LinkedTechResponse {
    fn from(t: LinkedTech) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title_es: Option<String>,
    pub title_en: Option<String>,
    pub description_es: Option<String>,
    pub description_en: Option<String>,
    pub content_es: Option<String>,
    pub content_en: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: String,
    pub is_featured: bool,
    pub display_order: i32,
    pub techs: Vec<LinkedTechResponse>,
}

impl ProjectResponse {
    fn build(p: Project, techs: Vec<LinkedTech>) -> Self {
        Self {
            id: p.id,
            title_es: p.title.es,
            title_en: p.title.en,
            description_es: p.description.es,
            description_en: p.description.en,
            content_es: p.content.es,
            content_en: p.content.en,
            live_url: p.live_url,
            repo_url: p.repo_url,
            image_url: p.image_url,
            is_featured: p.is_featured,
            display_order: p.display_order,
            techs: techs.into_iter().map(LinkedTechResponse::from).collect(),
        }
    }
}

impl From<ProjectWithTechs> for ProjectResponse {
    fn from(p: ProjectWithTechs) -> Self {
        Self::build(p.project, p.techs)
    }
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self::build(p, Vec::new())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectRequest {
    #[serde(default)]
    pub title_es: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub description_es: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub content_es: String,
    #[serde(default)]
    pub content_en: String,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub tech_ids: Vec<Uuid>,
    /// Required when creating; omit to keep the current image
    pub image: Option<FilePayloadDto>,
}

impl ProjectRequest {
    pub fn into_draft(self, id: Option<Uuid>) -> Result<ProjectDraft, FieldError> {
        let image = self.image.map(|f| f.decode("image")).transpose()?;

        Ok(ProjectDraft {
            id,
            title_es: self.title_es,
            title_en: self.title_en,
            description_es: self.description_es,
            description_en: self.description_en,
            content_es: self.content_es,
            content_en: self.content_en,
            live_url: self.live_url,
            repo_url: self.repo_url,
            is_featured: self.is_featured,
            display_order: self.display_order,
            tech_ids: self.tech_ids,
            image,
        })
    }
}

/// The saved project plus the refreshed list. The list is omitted when the
/// re-read fails after a successful save.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectSaveResponse {
    pub saved: ProjectResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectResponse>>,
}
