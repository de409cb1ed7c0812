use actix_web::{post, put, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::certificate::adapter::incoming::web::dto::{
    CertificateRequest, CertificateResponse, CertificateSaveResponse,
};
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_certificates::reload;

async fn save(
    id: Option<Uuid>,
    req: CertificateRequest,
    data: web::Data<AppState>,
) -> HttpResponse {
    let draft = match req.into_draft(id) {
        Ok(draft) => draft,
        Err(field_error) => return ApiResponse::validation_failed(vec![field_error]),
    };
    let use_case = data.certificate.save.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Certificate,
        EditorTarget::from_id(id),
        async move { use_case.execute(draft).await },
    )
    .await;

    match outcome {
        Ok(Ok(certificate)) => {
            let certificates = reload(&data).await;
            let saved = certificates
                .as_ref()
                .and_then(|list| list.iter().find(|c| c.id == certificate.id).cloned())
                .unwrap_or_else(|| CertificateResponse::from(certificate));
            let body = CertificateSaveResponse {
                saved,
                certificates,
            };

            if id.is_some() {
                ApiResponse::success(body)
            } else {
                ApiResponse::created(body)
            }
        }
        Ok(Err(e)) => editor_error_response(e, "CERTIFICATE_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}

/// Create a certificate
#[utoipa::path(
    post,
    path = "/admin/certificates",
    tag = "admin",
    request_body = CertificateRequest,
    responses(
        (status = 201, description = "Certificate created", body = inline(SuccessResponse<CertificateSaveResponse>)),
        (status = 400, description = "Invalid fields or file", body = ErrorResponse),
        (status = 500, description = "Record store failure, tagged with the failed step", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[post("/admin/certificates")]
pub async fn create_certificate_handler(
    _session: AdminSessionGuard,
    req: web::Json<CertificateRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(None, req.into_inner(), data).await
}

/// Edit a certificate
#[utoipa::path(
    put,
    path = "/admin/certificates/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Certificate id")),
    request_body = CertificateRequest,
    responses(
        (status = 200, description = "Certificate saved", body = inline(SuccessResponse<CertificateSaveResponse>)),
        (status = 400, description = "Invalid fields or file", body = ErrorResponse),
        (status = 404, description = "No such certificate", body = ErrorResponse),
        (status = 409, description = "A save for this certificate is running", body = ErrorResponse),
        (status = 500, description = "Record store failure, tagged with the failed step", body = ErrorResponse),
        (status = 502, description = "Asset store rejected the upload", body = ErrorResponse),
    )
)]
#[put("/admin/certificates/{id}")]
pub async fn update_certificate_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    req: web::Json<CertificateRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(Some(path.into_inner()), req.into_inner(), data).await
}
