use actix_web::{delete, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse, ConfirmQuery};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_certificates::reload;

/// Delete a certificate and, best effort, its image
#[utoipa::path(
    delete,
    path = "/admin/certificates/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Certificate id"), ConfirmQuery),
    responses(
        (status = 200, description = "Deleted; body is the refreshed certificate list"),
        (status = 400, description = "Missing ?confirm=true", body = ErrorResponse),
        (status = 404, description = "No such certificate", body = ErrorResponse),
        (status = 500, description = "Record store failure", body = ErrorResponse),
    )
)]
#[delete("/admin/certificates/{id}")]
pub async fn delete_certificate_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    query: web::Query<ConfirmQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    if let Err(resp) = query.require() {
        return resp;
    }

    let id = path.into_inner();
    let use_case = data.certificate.delete.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::Certificate,
        EditorTarget::Edit(id),
        async move { use_case.execute(id).await },
    )
    .await;

    match outcome {
        Ok(Ok(())) => ApiResponse::success(reload(&data).await.unwrap_or_default()),
        Ok(Err(e)) => editor_error_response(e, "CERTIFICATE_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::incoming::web::session_gate;
    use crate::tests::support::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{
        sample_certificate, InMemoryAssetStore, InMemoryRecordStore, StoreCall,
    };
    use actix_web::{middleware::from_fn, test, App};

    #[actix_web::test]
    async fn delete_removes_row_and_image() {
        let records = InMemoryRecordStore::default();
        let assets = InMemoryAssetStore::default();
        let url = assets.seed("certificates/aws.png");
        let mut cert = sample_certificate();
        cert.image_url = Some(url.clone());
        let cert = records.seed_certificate(cert);

        let state = TestAppStateBuilder::default()
            .with_records(records.clone())
            .with_asset_store(assets.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(from_fn(session_gate))
                .service(delete_certificate_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/certificates/{}?confirm=true", cert.id))
            .cookie(admin_cookie())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 0);
        assert!(records.certificate(cert.id).is_none());
        assert!(!assets.contains_url(&url));
    }

    #[actix_web::test]
    async fn store_failure_reports_the_step() {
        let records = InMemoryRecordStore::default();
        let cert = records.seed_certificate(sample_certificate());
        records.fail_on(StoreCall::DeleteCertificate, "connection reset");

        let state = TestAppStateBuilder::default()
            .with_records(records.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(from_fn(session_gate))
                .service(delete_certificate_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/admin/certificates/{}?confirm=true", cert.id))
            .cookie(admin_cookie())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "RECORD_STORE_ERROR");
        assert!(records.certificate(cert.id).is_some());
    }
}
