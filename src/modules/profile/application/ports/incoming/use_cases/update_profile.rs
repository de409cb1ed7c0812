use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileForm};
use crate::shared::workflow::EditorError;

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, form: ProfileForm) -> Result<Profile, EditorError>;
}
