use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceLog;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperienceError, ListExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;

pub struct ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListExperienceUseCase for ListExperienceService<Q>
where
    Q: ExperienceQuery,
{
    async fn execute(&self) -> Result<Vec<ExperienceLog>, ListExperienceError> {
        self.query
            .list()
            .await
            .map_err(|e| ListExperienceError::QueryError(e.to_string()))
    }
}
