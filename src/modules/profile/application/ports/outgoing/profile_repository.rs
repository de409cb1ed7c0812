use async_trait::async_trait;

use crate::modules::profile::application::domain::entities::{Profile, ProfileChange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile row has not been seeded")]
    NotSeeded,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The profile singleton. Its id never leaves the adapter.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_singleton(&self) -> Result<Profile, ProfileRepositoryError>;

    async fn update_singleton(
        &self,
        change: ProfileChange,
    ) -> Result<Profile, ProfileRepositoryError>;
}
