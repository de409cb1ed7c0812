use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::api::schemas::ErrorResponse;
use crate::modules::portfolio::adapter::incoming::web::lang::{resolve_lang, LangQuery};
use crate::shared::api::ApiResponse;
use crate::shared::i18n::LANG_COOKIE_NAME;
use crate::AppState;

/// Public portfolio
///
/// Every section localized to one language, plus page metadata. Sections
/// that cannot be read are returned empty.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "public",
    params(LangQuery),
    responses(
        (status = 200, description = "Localized portfolio view"),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(
    req: HttpRequest,
    query: web::Query<LangQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let cookie = req.cookie(LANG_COOKIE_NAME);
    let lang = match resolve_lang(query.lang.as_deref(), cookie.as_ref().map(|c| c.value())) {
        Ok(lang) => lang,
        Err(e) => return ApiResponse::bad_request("UNSUPPORTED_LANGUAGE", &e.to_string()),
    };

    ApiResponse::success(data.portfolio.compose.compose(lang).await)
}
