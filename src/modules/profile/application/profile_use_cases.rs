use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, ReplaceProfileAssetUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub replace_asset: Arc<dyn ReplaceProfileAssetUseCase + Send + Sync>,
}
