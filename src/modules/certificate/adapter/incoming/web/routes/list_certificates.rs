use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::certificate::adapter::incoming::web::dto::CertificateResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(super) async fn reload(data: &AppState) -> Option<Vec<CertificateResponse>> {
    match data.certificate.list.execute().await {
        Ok(list) => Some(list.into_iter().map(CertificateResponse::from).collect()),
        Err(e) => {
            warn!(error = %e, "Could not refresh certificate list after write");
            None
        }
    }
}

/// List certificates, most recently issued first
#[utoipa::path(
    get,
    path = "/admin/certificates",
    tag = "admin",
    responses(
        (status = 200, description = "All certificates"),
        (status = 307, description = "No valid session; redirected to /login"),
    )
)]
#[get("/admin/certificates")]
pub async fn list_certificates_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.certificate.list.execute().await {
        Ok(list) => ApiResponse::success(
            list.into_iter()
                .map(CertificateResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list certificates");
            ApiResponse::internal_error()
        }
    }
}
