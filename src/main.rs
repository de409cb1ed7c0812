pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::{session_gate, CookieSettings};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    bootstrap_admin::{BootstrapAdminUseCase, BootstrapOutcome, IBootstrapAdminUseCase},
    login_admin::LoginAdminUseCase,
    logout_admin::LogoutAdminUseCase,
    resolve_session::ResolveSessionUseCase,
};
use crate::modules::asset::adapter::outgoing::{HttpAssetStore, WebpImageCompressor};
use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use crate::modules::certificate::application::certificate_use_cases::CertificateUseCases;
use crate::modules::certificate::application::service::{
    DeleteCertificateService, ListCertificatesService, SaveCertificateService,
};
use crate::modules::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::service::ListExperienceService;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::service::ComposePortfolioService;
use crate::modules::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::service::{
    GetProfileService, ReplaceProfileAssetService, UpdateProfileService,
};
use crate::modules::project::adapter::outgoing::{
    ProjectQueryPostgres, ProjectRepositoryPostgres, ProjectTechRepositoryPostgres,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    DeleteProjectService, ListProjectsService, SaveProjectService,
};
use crate::modules::tech_stack::adapter::outgoing::TechStackRepositoryPostgres;
use crate::modules::tech_stack::application::service::{
    DeleteTechStackService, ListTechStackService, SaveTechStackService,
};
use crate::modules::tech_stack::application::tech_stack_use_cases::TechStackUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;
use crate::shared::workflow::EditorRegistry;

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub tech_stack: TechStackUseCases,
    pub certificate: CertificateUseCases,
    pub experience: ExperienceUseCases,
    pub portfolio: PortfolioUseCases,
    /// One in-flight save per editor target
    pub editors: EditorRegistry,
    pub cookies: CookieSettings,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{context}: {e}");
    io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    shared::config::load_env_files();
    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("Invalid JWT configuration", e))?;
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(
        Argon2Hasher::from_env().map_err(|e| startup_error("Invalid Argon2 configuration", e))?,
    );

    // Redis over TLS needs a process-wide crypto provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("A rustls crypto provider was already installed");
    }

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .map_err(|e| startup_error("Failed to connect to database", e))?,
    );

    // Redis connection
    let redis_pool = Arc::new(
        Config::from_url(&config.redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| startup_error("Failed to create Redis pool", e))?,
    );

    // Object storage
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| startup_error("Failed to build HTTP client", e))?;
    let assets = AssetLifecycle::new(
        Arc::new(HttpAssetStore::new(
            http,
            config.storage.base_url.clone(),
            config.storage.api_key.clone(),
        )),
        Arc::new(WebpImageCompressor::default()),
        config.storage.bucket.clone(),
    );

    // Auth
    let tokens: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(jwt_config));
    let revoked = RedisTokenRepository::new(Arc::clone(&redis_pool));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));

    if let Some(admin) = config.admin_bootstrap.clone() {
        let bootstrap = BootstrapAdminUseCase::new(
            user_query.clone(),
            UserRepositoryPostgres::new(Arc::clone(&db)),
            Arc::clone(&password_hasher),
        );
        match bootstrap.execute(admin).await {
            Ok(BootstrapOutcome::Created) => info!("Admin account created"),
            Ok(BootstrapOutcome::AlreadyPresent) => info!("Admin account already present"),
            Err(e) => return Err(startup_error("Admin bootstrap failed", e)),
        }
    }

    let auth = AuthUseCases {
        login: Arc::new(LoginAdminUseCase::new(
            user_query,
            Arc::clone(&password_hasher),
            Arc::clone(&tokens),
        )),
        logout: Arc::new(LogoutAdminUseCase::new(revoked.clone(), Arc::clone(&tokens))),
        sessions: Arc::new(ResolveSessionUseCase::new(revoked, Arc::clone(&tokens))),
    };

    // Content
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project_links = ProjectTechRepositoryPostgres::new(Arc::clone(&db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let tech_repo = TechStackRepositoryPostgres::new(Arc::clone(&db));
    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db));
    let experience_query = ExperienceQueryPostgres::new(Arc::clone(&db));

    let state = AppState {
        auth,
        profile: ProfileUseCases {
            get: Arc::new(GetProfileService::new(profile_repo.clone())),
            update: Arc::new(UpdateProfileService::new(profile_repo.clone())),
            replace_asset: Arc::new(ReplaceProfileAssetService::new(
                profile_repo.clone(),
                assets.clone(),
            )),
        },
        project: ProjectUseCases {
            list: Arc::new(ListProjectsService::new(project_query.clone())),
            save: Arc::new(SaveProjectService::new(
                project_repo.clone(),
                project_links.clone(),
                assets.clone(),
            )),
            delete: Arc::new(DeleteProjectService::new(
                project_repo,
                project_links,
                assets.clone(),
            )),
        },
        tech_stack: TechStackUseCases {
            list: Arc::new(ListTechStackService::new(tech_repo.clone())),
            save: Arc::new(SaveTechStackService::new(tech_repo.clone())),
            delete: Arc::new(DeleteTechStackService::new(tech_repo.clone())),
        },
        certificate: CertificateUseCases {
            list: Arc::new(ListCertificatesService::new(certificate_repo.clone())),
            save: Arc::new(SaveCertificateService::new(
                certificate_repo.clone(),
                assets.clone(),
            )),
            delete: Arc::new(DeleteCertificateService::new(
                certificate_repo.clone(),
                assets,
            )),
        },
        experience: ExperienceUseCases {
            list: Arc::new(ListExperienceService::new(experience_query.clone())),
        },
        portfolio: PortfolioUseCases {
            compose: Arc::new(ComposePortfolioService::new(
                profile_repo,
                project_query,
                experience_query,
                certificate_repo,
                tech_repo,
            )),
        },
        editors: EditorRegistry::new(),
        cookies: CookieSettings::new(config.secure_cookies),
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(Arc::clone(&redis_pool)))
            .app_data(custom_json_config())
            .wrap(from_fn(session_gate))
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{certificate, experience, portfolio, profile, project, tech_stack};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    // Public
    cfg.service(portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(portfolio::adapter::incoming::web::routes::set_language_handler);
    // Admin
    cfg.service(portfolio::adapter::incoming::web::routes::admin_overview_handler);
    cfg.service(profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(profile::adapter::incoming::web::routes::replace_avatar_handler);
    cfg.service(profile::adapter::incoming::web::routes::replace_cv_handler);
    cfg.service(project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    cfg.service(tech_stack::adapter::incoming::web::routes::list_tech_handler);
    cfg.service(tech_stack::adapter::incoming::web::routes::create_tech_handler);
    cfg.service(tech_stack::adapter::incoming::web::routes::update_tech_handler);
    cfg.service(tech_stack::adapter::incoming::web::routes::delete_tech_handler);
    cfg.service(certificate::adapter::incoming::web::routes::list_certificates_handler);
    cfg.service(certificate::adapter::incoming::web::routes::create_certificate_handler);
    cfg.service(certificate::adapter::incoming::web::routes::update_certificate_handler);
    cfg.service(certificate::adapter::incoming::web::routes::delete_certificate_handler);
    cfg.service(experience::adapter::incoming::web::routes::list_experience_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
