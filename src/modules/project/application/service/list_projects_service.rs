use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectWithTechs;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListProjectsError, ListProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;

pub struct ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListProjectsUseCase for ListProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self) -> Result<Vec<ProjectWithTechs>, ListProjectsError> {
        self.query
            .list_with_techs()
            .await
            .map_err(|e| ListProjectsError::QueryError(e.to_string()))
    }
}
