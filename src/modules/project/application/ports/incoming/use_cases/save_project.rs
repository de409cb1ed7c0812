use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{Project, ProjectDraft};
use crate::shared::workflow::EditorError;

/// Create (no id) or edit a project, its image and its technology links.
#[async_trait]
pub trait SaveProjectUseCase: Send + Sync {
    async fn execute(&self, draft: ProjectDraft) -> Result<Project, EditorError>;
}
