use actix_web::{post, put, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::project::adapter::incoming::web::dto::{
    ProjectRequest, ProjectResponse, ProjectSaveResponse,
};
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_projects::reload;

async fn save(id: Option<Uuid>, req: ProjectRequest, data: web::Data<AppState>) -> HttpResponse {
    let draft = match req.into_draft(id) {
        Ok(draft) => draft,
        Err(field_error) => return ApiResponse::validation_failed(vec![field_error]),
    };
    let use_case = data.project.save.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Project,
        EditorTarget::from_id(id),
        async move { use_case.execute(draft).await },
    )
    .await;

    match outcome {
        Ok(Ok(project)) => {
            let projects = reload(&data).await;
            let saved = projects
                .as_ref()
                .and_then(|list| list.iter().find(|p| p.id == project.id).cloned())
                .unwrap_or_else(|| ProjectResponse::from(project));
            let body = ProjectSaveResponse { saved, projects };

            if id.is_some() {
                ApiResponse::success(body)
            } else {
                ApiResponse::created(body)
            }
        }
        Ok(Err(e)) => editor_error_response(e, "PROJECT_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}

/// Create a project
///
/// Uploads the image, writes the row, then links the selected technologies.
#[utoipa::path(
    post,
    path = "/admin/projects",
    tag = "admin",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectSaveResponse>)),
        (status = 400, description = "Invalid fields or file", body = ErrorResponse),
        (status = 500, description = "Record store failure, tagged with the failed step", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[post("/admin/projects")]
pub async fn create_project_handler(
    _session: AdminSessionGuard,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(None, req.into_inner(), data).await
}

/// Edit a project
///
/// Without `image` the current image is kept. Technology links are replaced
/// by exactly the submitted set.
#[utoipa::path(
    put,
    path = "/admin/projects/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project saved", body = inline(SuccessResponse<ProjectSaveResponse>)),
        (status = 400, description = "Invalid fields or file", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 409, description = "A save for this project is running", body = ErrorResponse),
        (status = 500, description = "Record store failure, tagged with the failed step", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[put("/admin/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(Some(path.into_inner()), req.into_inner(), data).await
}
