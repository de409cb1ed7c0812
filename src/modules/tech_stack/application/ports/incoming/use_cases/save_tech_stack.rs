use async_trait::async_trait;

use crate::modules::tech_stack::application::domain::entities::{TechForm, TechStack};
use crate::shared::workflow::EditorError;

#[async_trait]
pub trait SaveTechStackUseCase: Send + Sync {
    async fn execute(&self, form: TechForm) -> Result<TechStack, EditorError>;
}
