use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::portfolio::application::domain::entities::SectionCounts;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub full_name: Option<String>,
    pub counts: SectionCounts,
}

/// Admin landing page: how much content each section holds.
#[utoipa::path(
    get,
    path = "/admin",
    tag = "admin",
    responses(
        (status = 200, description = "Per-section counts"),
        (status = 307, description = "No valid session; redirected to /login"),
    )
)]
#[get("/admin")]
pub async fn admin_overview_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    let snapshot = data.portfolio.compose.snapshot().await;

    ApiResponse::success(AdminOverview {
        full_name: snapshot.profile.as_ref().map(|p| p.full_name.clone()),
        counts: snapshot.counts(),
    })
}
