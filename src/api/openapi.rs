use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::modules::asset::adapter::incoming::web::FilePayloadDto;
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody,
};
use crate::modules::auth::adapter::incoming::web::SESSION_COOKIE_NAME;
use crate::modules::certificate::adapter::incoming::web::dto::{
    CertificateRequest, CertificateResponse, CertificateSaveResponse,
};
use crate::modules::experience::adapter::incoming::web::dto::ExperienceResponse;
use crate::modules::portfolio::adapter::incoming::web::routes::LanguageResponse;
use crate::modules::profile::adapter::incoming::web::dto::{
    ProfileResponse, ReplaceAssetRequest, UpdateProfileRequest,
};
use crate::modules::project::adapter::incoming::web::dto::{
    LinkedTechResponse, ProjectRequest, ProjectResponse, ProjectSaveResponse,
};
use crate::modules::tech_stack::adapter::incoming::web::dto::{
    TechRequest, TechResponse, TechSaveResponse,
};
use crate::modules::tech_stack::application::domain::entities::TechCategory;
use crate::shared::validation::FieldError;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Public portfolio and admin content management",
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::login_page_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_handler,

        // Public
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::set_language_handler,

        // Admin
        crate::modules::portfolio::adapter::incoming::web::routes::admin_overview_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::update_profile_handler,
        crate::modules::profile::adapter::incoming::web::routes::replace_avatar_handler,
        crate::modules::profile::adapter::incoming::web::routes::replace_cv_handler,
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::list_tech_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::create_tech_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::update_tech_handler,
        crate::modules::tech_stack::adapter::incoming::web::routes::delete_tech_handler,
        crate::modules::certificate::adapter::incoming::web::routes::list_certificates_handler,
        crate::modules::certificate::adapter::incoming::web::routes::create_certificate_handler,
        crate::modules::certificate::adapter::incoming::web::routes::update_certificate_handler,
        crate::modules::certificate::adapter::incoming::web::routes::delete_certificate_handler,
        crate::modules::experience::adapter::incoming::web::routes::list_experience_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ProfileResponse>,
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Auth
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody,

            // Public
            LanguageResponse,

            // Editors
            FilePayloadDto,
            ProfileResponse,
            UpdateProfileRequest,
            ReplaceAssetRequest,
            ProjectRequest,
            ProjectResponse,
            ProjectSaveResponse,
            LinkedTechResponse,
            TechCategory,
            TechRequest,
            TechResponse,
            TechSaveResponse,
            CertificateRequest,
            CertificateResponse,
            CertificateSaveResponse,
            ExperienceResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin sign-in and sign-out"),
        (name = "public", description = "Localized portfolio for visitors"),
        (name = "admin", description = "Content editors behind the session gate"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "HttpOnly session cookie set by POST /login",
                ))),
            )
        }
    }
}
