use async_trait::async_trait;

use crate::modules::certificate::application::domain::entities::{
    Certificate, CertificateDraft,
};
use crate::shared::workflow::EditorError;

#[async_trait]
pub trait SaveCertificateUseCase: Send + Sync {
    async fn execute(&self, draft: CertificateDraft) -> Result<Certificate, EditorError>;
}
