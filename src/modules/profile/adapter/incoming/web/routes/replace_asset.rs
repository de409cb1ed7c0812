use actix_web::{put, web, HttpResponse};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::profile::adapter::incoming::web::dto::{ProfileResponse, ReplaceAssetRequest};
use crate::modules::profile::application::domain::entities::ProfileAsset;
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

async fn replace(
    slot: ProfileAsset,
    field: &str,
    req: ReplaceAssetRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    let upload = match req.file.decode(field) {
        Ok(upload) => upload,
        Err(field_error) => return ApiResponse::validation_failed(vec![field_error]),
    };
    let use_case = data.profile.replace_asset.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Profile,
        EditorTarget::Singleton,
        async move { use_case.execute(slot, upload).await },
    )
    .await;

    match outcome {
        Ok(Ok(profile)) => {
            info!(asset = ?slot, "Profile asset replaced");
            ApiResponse::success(ProfileResponse::from(profile))
        }
        Ok(Err(e)) => editor_error_response(e, "PROFILE_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}

/// Replace avatar
///
/// Compresses and uploads the new image, points the profile at it, then
/// removes the previous avatar object.
#[utoipa::path(
    put,
    path = "/admin/profile/avatar",
    tag = "admin",
    request_body = ReplaceAssetRequest,
    responses(
        (status = 200, description = "Avatar replaced", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "File rejected by upload policy", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[put("/admin/profile/avatar")]
pub async fn replace_avatar_handler(
    _session: AdminSessionGuard,
    req: web::Json<ReplaceAssetRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    replace(ProfileAsset::Avatar, "avatar", req.into_inner(), data).await
}

/// Replace CV
///
/// Uploads a PDF (5 MiB max) as-is and points the profile at it.
#[utoipa::path(
    put,
    path = "/admin/profile/cv",
    tag = "admin",
    request_body = ReplaceAssetRequest,
    responses(
        (status = 200, description = "CV replaced", body = inline(SuccessResponse<ProfileResponse>)),
        (status = 400, description = "Not a PDF or too large", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[put("/admin/profile/cv")]
pub async fn replace_cv_handler(
    _session: AdminSessionGuard,
    req: web::Json<ReplaceAssetRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    replace(ProfileAsset::CvDocument, "cv", req.into_inner(), data).await
}
