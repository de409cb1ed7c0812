use async_trait::async_trait;
use uuid::Uuid;

use crate::shared::workflow::EditorError;

#[async_trait]
pub trait DeleteCertificateUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), EditorError>;
}
