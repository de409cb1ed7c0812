use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectTechRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The `project_techs` join table.
///
/// Clearing and inserting are separate calls with no transaction between
/// them; callers replace a project's links by clearing first.
#[async_trait]
pub trait ProjectTechRepository: Send + Sync {
    /// Returns how many links were removed.
    async fn clear_for_project(&self, project_id: Uuid) -> Result<u64, ProjectTechRepositoryError>;

    async fn insert_links(
        &self,
        project_id: Uuid,
        tech_ids: &[Uuid],
    ) -> Result<(), ProjectTechRepositoryError>;
}
