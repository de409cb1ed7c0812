use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::tech_stack::application::ports::incoming::use_cases::DeleteTechStackUseCase;
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};
use crate::shared::workflow::{EditorError, SaveStep};

pub struct DeleteTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> DeleteTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTechStackUseCase for DeleteTechStackService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self, id: Uuid) -> Result<(), EditorError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                info!(tech_id = %id, "Technology deleted");
                Ok(())
            }
            Err(TechStackRepositoryError::StillReferenced) => {
                warn!(tech_id = %id, "Refusing to delete a technology still linked to projects");
                Err(EditorError::StillReferenced)
            }
            Err(TechStackRepositoryError::NotFound) => Err(EditorError::NotFound("Technology")),
            Err(TechStackRepositoryError::DatabaseError(msg)) => {
                Err(EditorError::store(SaveStep::DeleteRecord, msg))
            }
        }
    }
}
