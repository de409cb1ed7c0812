use actix_web::{delete, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse, ConfirmQuery};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_tech::reload;

/// Remove a technology
///
/// Refused with 409 while any project still lists it.
#[utoipa::path(
    delete,
    path = "/admin/tech/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Technology id"), ConfirmQuery),
    responses(
        (status = 200, description = "Deleted; body is the refreshed catalog"),
        (status = 400, description = "Missing ?confirm=true", body = ErrorResponse),
        (status = 404, description = "No such technology", body = ErrorResponse),
        (status = 409, description = "Still used by one or more projects", body = ErrorResponse),
    )
)]
#[delete("/admin/tech/{id}")]
pub async fn delete_tech_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Err(resp) = query.require() {
        return resp;
    }

    let id = path.into_inner();
    let use_case = data.tech_stack.delete.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::TechStack,
        EditorTarget::Edit(id),
        async move { use_case.execute(id).await },
    )
    .await;

    match outcome {
        Ok(Ok(())) => ApiResponse::success(reload(&data).await.unwrap_or_default()),
        Ok(Err(e)) => editor_error_response(e, "TECH_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}
