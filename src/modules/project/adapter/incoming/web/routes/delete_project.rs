use actix_web::{delete, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse, ConfirmQuery};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_projects::reload;

/// Delete a project
///
/// Removes its technology links, the row, then its image (best effort).
#[utoipa::path(
    delete,
    path = "/admin/projects/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Project id"), ConfirmQuery),
    responses(
        (status = 200, description = "Deleted; body is the refreshed project list"),
        (status = 400, description = "Missing ?confirm=true", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 500, description = "Record store failure, tagged with the failed step", body = ErrorResponse),
    )
)]
#[delete("/admin/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Err(resp) = query.require() {
        return resp;
    }

    let id = path.into_inner();
    let use_case = data.project.delete.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Project,
        EditorTarget::Edit(id),
        async move { use_case.execute(id).await },
    )
    .await;

    match outcome {
        Ok(Ok(())) => ApiResponse::success(reload(&data).await.unwrap_or_default()),
        Ok(Err(e)) => editor_error_response(e, "PROJECT_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}
