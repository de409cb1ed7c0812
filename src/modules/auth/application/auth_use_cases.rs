use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    login_admin::ILoginAdminUseCase, logout_admin::ILogoutAdminUseCase,
    resolve_session::SessionResolver,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutAdminUseCase + Send + Sync>,
    pub sessions: Arc<dyn SessionResolver + Send + Sync>,
}
