use async_trait::async_trait;

use crate::modules::tech_stack::application::domain::entities::TechStack;
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    ListTechStackError, ListTechStackUseCase,
};
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

pub struct ListTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> ListTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListTechStackUseCase for ListTechStackService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self) -> Result<Vec<TechStack>, ListTechStackError> {
        self.repository
            .list()
            .await
            .map_err(|e| ListTechStackError::RepositoryError(e.to_string()))
    }
}
