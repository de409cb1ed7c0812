use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::tech_stack::adapter::incoming::web::dto::TechResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Catalog re-read after a write. `None` when the store fails.
pub(super) async fn reload(data: &AppState) -> Option<Vec<TechResponse>> {
    match data.tech_stack.list.execute().await {
        Ok(techs) => Some(techs.into_iter().map(TechResponse::from).collect()),
        Err(e) => {
            warn!(error = %e, "Could not refresh technology list after write");
            None
        }
    }
}

#[get("/admin/tech")]
pub async fn list_tech_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.tech_stack.list.execute().await {
        Ok(techs) => ApiResponse::success(
            techs
                .into_iter()
                .map(TechResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list technologies");
            ApiResponse::internal_error()
        }
    }
}
