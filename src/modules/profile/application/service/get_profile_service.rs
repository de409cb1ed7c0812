use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository,
{
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        self.repository.get_singleton().await.map_err(|e| match e {
            ProfileRepositoryError::NotSeeded => GetProfileError::NotFound,
            ProfileRepositoryError::DatabaseError(msg) => GetProfileError::RepositoryError(msg),
        })
    }
}
