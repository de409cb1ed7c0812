use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::profile::adapter::incoming::web::dto::ProfileResponse;
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current profile as stored, both languages side by side.
#[get("/admin/profile")]
pub async fn get_profile_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(GetProfileError::NotFound) => {
            error!("Profile row missing; migrations not applied?");
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(GetProfileError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
