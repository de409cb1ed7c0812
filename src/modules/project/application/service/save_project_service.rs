use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::AssetKind;
use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::modules::project::application::ports::incoming::use_cases::SaveProjectUseCase;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectTechRepository,
};
use crate::shared::validation::FieldError;
use crate::shared::workflow::{EditorError, SaveStep};

/// Project save workflow:
/// LoadCurrent -> ResolveImage -> UpsertRecord -> CleanupOldImage -> SyncRelations.
///
/// No step is rolled back once a later one fails. SyncRelations always
/// clears before inserting, so re-submitting the same form converges.
pub struct SaveProjectService<R, L>
where
    R: ProjectRepository,
    L: ProjectTechRepository,
{
    projects: R,
    links: L,
    assets: AssetLifecycle,
}

impl<R, L> SaveProjectService<R, L>
where
    R: ProjectRepository,
    L: ProjectTechRepository,
{
    pub fn new(projects: R, links: L, assets: AssetLifecycle) -> Self {
        Self {
            projects,
            links,
            assets,
        }
    }

    async fn load_current(&self, id: Option<Uuid>) -> Result<Option<Project>, EditorError> {
        let Some(id) = id else {
            return Ok(None);
        };

        match self.projects.find_by_id(id).await {
            Ok(Some(project)) => Ok(Some(project)),
            Ok(None) | Err(ProjectRepositoryError::NotFound) => {
                Err(EditorError::NotFound("Project"))
            }
            Err(ProjectRepositoryError::DatabaseError(msg)) => {
                Err(EditorError::store(SaveStep::LoadCurrent, msg))
            }
        }
    }

    async fn sync_relations(&self, project_id: Uuid, tech_ids: &[Uuid]) -> Result<(), EditorError> {
        let fail = |e: &dyn std::fmt::Display| {
            error!(project_id = %project_id, step = %SaveStep::SyncRelations, "Relation sync failed: {}", e);
            EditorError::store(SaveStep::SyncRelations, e.to_string())
        };

        let removed = self
            .links
            .clear_for_project(project_id)
            .await
            .map_err(|e| fail(&e))?;
        self.links
            .insert_links(project_id, tech_ids)
            .await
            .map_err(|e| fail(&e))?;

        info!(project_id = %project_id, removed, inserted = tech_ids.len(), "Technology links replaced");
        Ok(())
    }
}

#[async_trait]
impl<R, L> SaveProjectUseCase for SaveProjectService<R, L>
where
    R: ProjectRepository,
    L: ProjectTechRepository,
{
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, EditorError> {
        let mut valid = draft.validate().map_err(EditorError::Invalid)?;

        let current = self.load_current(valid.id).await?;
        let id = valid.id.unwrap_or_else(Uuid::new_v4);

        // ResolveImage
        let (image_url, uploaded) = match (valid.image.take(), &current) {
            (Some(upload), _) => (
                self.assets.store_image(AssetKind::ProjectImage, upload).await?,
                true,
            ),
            (None, Some(current)) => (current.image_url.clone(), false),
            (None, None) => {
                return Err(EditorError::Invalid(vec![FieldError::new(
                    "image",
                    "An image is required for a new project",
                )]))
            }
        };

        let (record, tech_ids) = valid.into_record(id, image_url.clone());

        let saved = match self.projects.upsert(record).await {
            Ok(saved) => saved,
            Err(e) => {
                error!(project_id = %id, step = %SaveStep::UpsertRecord, "Project upsert failed: {}", e);
                if uploaded {
                    // Nothing references the fresh object
                    self.assets.discard(&image_url).await;
                }
                return Err(EditorError::store(SaveStep::UpsertRecord, e.to_string()));
            }
        };

        let old_url = current.as_ref().map(|p| p.image_url.as_str());
        self.assets
            .discard_replaced(old_url, Some(&saved.image_url))
            .await;

        self.sync_relations(id, &tech_ids).await?;

        info!(project_id = %id, created = current.is_none(), "Project saved");
        Ok(saved)
    }
}
