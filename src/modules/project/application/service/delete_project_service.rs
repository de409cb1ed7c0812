use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError, ProjectTechRepository,
};
use crate::shared::workflow::{EditorError, SaveStep};

/// Join rows, then the project row, then (best effort) its image.
pub struct DeleteProjectService<R, L>
where
    R: ProjectRepository,
    L: ProjectTechRepository,
{
    projects: R,
    links: L,
    assets: AssetLifecycle,
}

impl<R, L> DeleteProjectService<R, L>
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
}

fn map_project_error(step: SaveStep, err: ProjectRepositoryError) -> EditorError {
    match err {
        ProjectRepositoryError::NotFound => EditorError::NotFound("Project"),
        ProjectRepositoryError::DatabaseError(msg) => EditorError::store(step, msg),
    }
}

#[async_trait]
impl<R, L> DeleteProjectUseCase for DeleteProjectService<R, L>
where
    R: ProjectRepository,
    L: ProjectTechRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), EditorError> {
        let project = self
            .projects
            .find_by_id(id)
            .await
            .map_err(|e| map_project_error(SaveStep::LoadCurrent, e))?
            .ok_or(EditorError::NotFound("Project"))?;

        self.links.clear_for_project(id).await.map_err(|e| {
            error!(project_id = %id, step = %SaveStep::DeleteRelations, "{}", e);
            EditorError::store(SaveStep::DeleteRelations, e.to_string())
        })?;

        self.projects
            .delete(id)
            .await
            .map_err(|e| map_project_error(SaveStep::DeleteRecord, e))?;

        let cleanup = self.assets.discard(&project.image_url).await;
        info!(project_id = %id, cleanup_failed = cleanup.is_failed(), "Project deleted");
        Ok(())
    }
}
