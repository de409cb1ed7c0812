use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::domain::entities::{
    Profile, ProfileChange, ProfileForm,
};
use crate::modules::profile::application::ports::incoming::use_cases::UpdateProfileUseCase;
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::workflow::{EditorError, SaveStep};

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

pub(super) fn map_profile_error(step: SaveStep, err: ProfileRepositoryError) -> EditorError {
    match err {
        ProfileRepositoryError::NotSeeded => EditorError::NotFound("Profile"),
        ProfileRepositoryError::DatabaseError(msg) => EditorError::store(step, msg),
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self, form: ProfileForm) -> Result<Profile, EditorError> {
        let details = form.validate().map_err(EditorError::Invalid)?;

        let profile = self
            .repository
            .update_singleton(ProfileChange::Details(details))
            .await
            .map_err(|e| map_profile_error(SaveStep::UpsertRecord, e))?;

        info!(step = %SaveStep::UpsertRecord, "Profile details saved");
        Ok(profile)
    }
}
