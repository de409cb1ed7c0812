use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectUseCase, ListProjectsUseCase, SaveProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub list: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub save: Arc<dyn SaveProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
}
