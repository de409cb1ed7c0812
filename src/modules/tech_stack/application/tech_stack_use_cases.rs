use std::sync::Arc;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    DeleteTechStackUseCase, ListTechStackUseCase, SaveTechStackUseCase,
};

#[derive(Clone)]
pub struct TechStackUseCases {
    pub list: Arc<dyn ListTechStackUseCase + Send + Sync>,
    pub save: Arc<dyn SaveTechStackUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTechStackUseCase + Send + Sync>,
}
