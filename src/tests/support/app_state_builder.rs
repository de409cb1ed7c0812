use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::incoming::web::CookieSettings;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminUseCase,
};
use crate::modules::auth::application::use_cases::logout_admin::{
    ILogoutAdminUseCase, LogoutAdminUseCase,
};
use crate::modules::auth::application::use_cases::resolve_session::{
    ResolveSessionUseCase, SessionResolver,
};
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::certificate::application::service::{
    DeleteCertificateService, ListCertificatesService, SaveCertificateService,
};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::service::ListExperienceService;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::service::ComposePortfolioService;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    GetProfileService, ReplaceProfileAssetService, UpdateProfileService,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    DeleteProjectService, ListProjectsService, SaveProjectService,
};
use crate::modules::tech_stack::application::service::{
    DeleteTechStackService, ListTechStackService, SaveTechStackService,
};
use crate::modules::tech_stack::application::tech_stack_use_cases::TechStackUseCases;
use crate::shared::workflow::EditorRegistry;
use crate::tests::support::in_memory::{
    sample_profile, InMemoryAssetStore, InMemoryProfileRepository, InMemoryRecordStore,
};
use crate::tests::support::stubs::{
    FixedTokenProvider, InMemoryTokenRepository, StubPasswordHasher, StubUserQuery,
};
use crate::AppState;

/// Wires the real services over in-memory stores. Individual auth use
/// cases can be swapped for route tests that only care about the handler.
pub struct TestAppStateBuilder {
    login: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    logout: Option<Arc<dyn ILogoutAdminUseCase + Send + Sync>>,
    sessions: Option<Arc<dyn SessionResolver + Send + Sync>>,
    records: InMemoryRecordStore,
    profile: InMemoryProfileRepository,
    assets: InMemoryAssetStore,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login: None,
            logout: None,
            sessions: None,
            records: InMemoryRecordStore::default(),
            profile: InMemoryProfileRepository::with_profile(sample_profile()),
            assets: InMemoryAssetStore::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutAdminUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn with_sessions(mut self, resolver: impl SessionResolver + Send + Sync + 'static) -> Self {
        self.sessions = Some(Arc::new(resolver));
        self
    }

    pub fn with_records(mut self, records: InMemoryRecordStore) -> Self {
        self.records = records;
        self
    }

    pub fn with_profile_repository(mut self, profile: InMemoryProfileRepository) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_asset_store(mut self, assets: InMemoryAssetStore) -> Self {
        self.assets = assets;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let tokens: Arc<dyn TokenProvider> = Arc::new(FixedTokenProvider::default());
        let revoked = InMemoryTokenRepository::default();
        let records = self.records;
        let profile = self.profile;
        let assets = self.assets.lifecycle();

        let auth = AuthUseCases {
            login: self.login.unwrap_or_else(|| {
                Arc::new(LoginAdminUseCase::new(
                    StubUserQuery::empty(),
                    Arc::new(StubPasswordHasher::verifying(false)),
                    tokens.clone(),
                ))
            }),
            logout: self.logout.unwrap_or_else(|| {
                Arc::new(LogoutAdminUseCase::new(revoked.clone(), tokens.clone()))
            }),
            sessions: self.sessions.unwrap_or_else(|| {
                Arc::new(ResolveSessionUseCase::new(revoked.clone(), tokens.clone()))
            }),
        };

        web::Data::new(AppState {
            auth,
            profile: ProfileUseCases {
                get: Arc::new(GetProfileService::new(profile.clone())),
                update: Arc::new(UpdateProfileService::new(profile.clone())),
                replace_asset: Arc::new(ReplaceProfileAssetService::new(
                    profile.clone(),
                    assets.clone(),
                )),
            },
            project: ProjectUseCases {
                list: Arc::new(ListProjectsService::new(records.clone())),
                save: Arc::new(SaveProjectService::new(
                    records.clone(),
                    records.clone(),
                    assets.clone(),
                )),
                delete: Arc::new(DeleteProjectService::new(
                    records.clone(),
                    records.clone(),
                    assets.clone(),
                )),
            },
            tech_stack: TechStackUseCases {
                list: Arc::new(ListTechStackService::new(records.clone())),
                save: Arc::new(SaveTechStackService::new(records.clone())),
                delete: Arc::new(DeleteTechStackService::new(records.clone())),
            },
            certificate: CertificateUseCases {
                list: Arc::new(ListCertificatesService::new(records.clone())),
                save: Arc::new(SaveCertificateService::new(records.clone(), assets.clone())),
                delete: Arc::new(DeleteCertificateService::new(records.clone(), assets)),
            },
            experience: ExperienceUseCases {
                list: Arc::new(ListExperienceService::new(records.clone())),
            },
            portfolio: PortfolioUseCases {
                compose: Arc::new(ComposePortfolioService::new(
                    profile,
                    records.clone(),
                    records.clone(),
                    records.clone(),
                    records,
                )),
            },
            editors: EditorRegistry::new(),
            cookies: CookieSettings::new(false),
        })
    }
}

