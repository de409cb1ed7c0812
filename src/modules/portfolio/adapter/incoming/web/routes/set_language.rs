use actix_web::{put, web, HttpResponse};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::shared::i18n::Lang;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct LanguageResponse {
    #[schema(example = "en")]
    pub lang: String,
}

/// Remember the visitor's language
///
/// Stores the choice in the `lang` cookie for later page loads.
#[utoipa::path(
    put,
    path = "/api/lang/{lang}",
    tag = "public",
    params(("lang" = String, Path, description = "`es` or `en`")),
    responses(
        (status = 200, description = "Cookie set", body = inline(SuccessResponse<LanguageResponse>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
    )
)]
#[put("/api/lang/{lang}")]
pub async fn set_language_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let lang = match path.parse::<Lang>() {
        Ok(lang) => lang,
        Err(e) => return ApiResponse::bad_request("UNSUPPORTED_LANGUAGE", &e.to_string()),
    };

    let mut response = ApiResponse::success(LanguageResponse {
        lang: lang.to_string(),
    });
    if let Err(e) = response.add_cookie(&data.cookies.lang_cookie(lang)) {
        error!(error = %e, "Failed to attach lang cookie");
        return ApiResponse::internal_error();
    }

    debug!(lang = %lang, "Language preference stored");
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn sets_the_lang_cookie() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(set_language_handler)).await;

        let req = test::TestRequest::put().uri("/api/lang/EN").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "lang")
            .expect("lang cookie");
        assert_eq!(cookie.value(), "en");
    }

    #[actix_web::test]
    async fn unknown_language_sets_nothing() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(set_language_handler)).await;

        let req = test::TestRequest::put().uri("/api/lang/de").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert!(resp.response().cookies().next().is_none());
    }
}
