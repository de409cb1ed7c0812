use actix_web::{put, web, HttpResponse};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::profile::adapter::incoming::web::dto::{
    ProfileResponse, UpdateProfileRequest,
};
use crate::modules::profile::application::domain::entities::ProfileForm;
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

/// Update profile details
///
/// Writes the scalar profile fields. Avatar and CV have their own endpoints.
#[utoipa::path(
    put,
    path = "/admin/profile",
    tag = "admin",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 409, description = "A profile save is already running", body = ErrorResponse),
        (status = 500, description = "Record store failure", body = ErrorResponse),
    )
)]
#[put("/admin/profile")]
pub async fn update_profile_handler(
    session: AdminSessionGuard,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let form = ProfileForm::from(req.into_inner());
    let use_case = data.profile.update.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Profile,
        EditorTarget::Singleton,
        async move { use_case.execute(form).await },
    )
    .await;

    match outcome {
        Ok(Ok(profile)) => {
            info!(user_id = %session.0.user_id, "Profile updated");
            ApiResponse::success(ProfileResponse::from(profile))
        }
        Ok(Err(e)) => editor_error_response(e, "PROFILE_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}
