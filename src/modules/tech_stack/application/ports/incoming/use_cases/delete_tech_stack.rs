use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::workflow::EditorError;

/// Fails with `EditorError::StillReferenced` while any project uses the technology.
#[async_trait]
pub trait DeleteTechStackUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), EditorError>;
}
