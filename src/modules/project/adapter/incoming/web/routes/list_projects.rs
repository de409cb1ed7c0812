use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::project::adapter::incoming::web::dto::ProjectResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project list re-read after a write. `None` when the store fails.
pub(super) async fn reload(data: &AppState) -> Option<Vec<ProjectResponse>> {
    match data.project.list.execute().await {
        Ok(projects) => Some(projects.into_iter().map(ProjectResponse::from).collect()),
        Err(e) => {
            warn!(error = %e, "Could not refresh project list after write");
            None
        }
    }
}

#[get("/admin/projects")]
pub async fn list_projects_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.project.list.execute().await {
        Ok(projects) => ApiResponse::success(
            projects
                .into_iter()
                .map(ProjectResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list projects");
            ApiResponse::internal_error()
        }
    }
}
