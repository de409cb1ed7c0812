use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::ListExperienceUseCase;

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperienceUseCase + Send + Sync>,
}
