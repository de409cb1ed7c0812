use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::AdminSessionGuard;
use crate::modules::experience::adapter::incoming::web::dto::ExperienceResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Work history, most recent first. Read-only.
#[utoipa::path(
    get,
    path = "/admin/experience",
    tag = "admin",
    responses(
        (status = 200, description = "All experience entries"),
        (status = 307, description = "No valid session; redirected to /login"),
    )
)]
#[get("/admin/experience")]
pub async fn list_experience_handler(
    _session: AdminSessionGuard,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.experience.list.execute().await {
        Ok(logs) => ApiResponse::success(
            logs.into_iter()
                .map(ExperienceResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            error!(error = %e, "Failed to list experience");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::incoming::web::session_gate;
    use crate::tests::support::admin_cookie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{sample_experience, InMemoryRecordStore};
    use actix_web::{middleware::from_fn, test, App};
    use chrono::NaiveDate;

    #[actix_web::test]
    async fn lists_entries_for_a_signed_in_admin() {
        let records = InMemoryRecordStore::default();
        records.seed_experience(sample_experience(
            "Initech",
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
        ));
        let state = TestAppStateBuilder::default().with_records(records).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(from_fn(session_gate))
                .service(list_experience_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/experience")
            .cookie(admin_cookie())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"][0]["company_name"], "Initech");
        assert_eq!(body["data"][0]["start_date"], "2020-03-01");
    }
}
