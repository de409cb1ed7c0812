use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::ComposePortfolioUseCase;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub compose: Arc<dyn ComposePortfolioUseCase + Send + Sync>,
}
