use actix_web::{post, put, web, HttpResponse};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::tech_stack::adapter::incoming::web::dto::{
    TechRequest, TechResponse, TechSaveResponse,
};
use crate::shared::api::{editor_error_response, guarded_save_response, ApiResponse};
use crate::shared::workflow::{run_guarded, EditorKind, EditorTarget};
use crate::AppState;

use super::list_tech::reload;

async fn save(id: Option<Uuid>, req: TechRequest, data: web::Data<AppState>) -> HttpResponse {
    let form = req.into_form(id);
    let use_case = data.tech_stack.save.clone();

    let outcome = run_guarded(
        &data.editors,
        EditorKind::TechStack,
        EditorTarget::from_id(id),
        async move { use_case.execute(form).await },
    )
    .await;

    match outcome {
        Ok(Ok(tech)) => {
            let body = TechSaveResponse {
                saved: TechResponse::from(tech),
                tech_stack: reload(&data).await,
            };
            if id.is_some() {
                ApiResponse::success(body)
            } else {
                ApiResponse::created(body)
            }
        }
        Ok(Err(e)) => editor_error_response(e, "TECH_NOT_FOUND"),
        Err(e) => guarded_save_response(e),
    }
}

/// Add a technology to the catalog
#[utoipa::path(
    post,
    path = "/admin/tech",
    tag = "admin",
    request_body = TechRequest,
    responses(
        (status = 201, description = "Technology created", body = inline(SuccessResponse<TechSaveResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
    )
)]
#[post("/admin/tech")]
pub async fn create_tech_handler(
    _session: AdminSessionGuard,
    req: web::Json<TechRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(None, req.into_inner(), data).await
}

/// Edit a technology
#[utoipa::path(
    put,
    path = "/admin/tech/{id}",
    tag = "admin",
    params(("id" = Uuid, Path, description = "Technology id")),
    request_body = TechRequest,
    responses(
        (status = 200, description = "Technology saved", body = inline(SuccessResponse<TechSaveResponse>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 409, description = "A save for this technology is running", body = ErrorResponse),
    )
)]
#[put("/admin/tech/{id}")]
pub async fn update_tech_handler(
    _session: AdminSessionGuard,
    path: web::Path<Uuid>,
    req: web::Json<TechRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    save(Some(path.into_inner()), req.into_inner(), data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::incoming::web::session_gate;
    use crate::modules::tech_stack::application::domain::entities::TechCategory;
    use crate::tests::support::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::InMemoryRecordStore;
    use actix_web::{middleware::from_fn, test, App};

    #[actix_web::test]
    async fn create_returns_saved_row_and_catalog() {
        let records = InMemoryRecordStore::default();
        records.seed_tech("Go", TechCategory::Backend);
        let state = TestAppStateBuilder::default()
            .with_records(records.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(from_fn(session_gate))
                .service(create_tech_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/tech")
            .cookie(admin_cookie())
            .set_json(serde_json::json!({
                "name": "Astro",
                "category": "frontend",
                "icon_slug": "astro"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["saved"]["category"], "FRONTEND");
        assert_eq!(body["data"]["tech_stack"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn unknown_category_is_a_field_error() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(from_fn(session_gate))
                .service(update_tech_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/admin/tech/{}", Uuid::new_v4()))
            .cookie(admin_cookie())
            .set_json(serde_json::json!({
                "name": "Figma",
                "category": "design",
                "icon_slug": "figma"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["fields"][0]["field"], "category");
    }
}
