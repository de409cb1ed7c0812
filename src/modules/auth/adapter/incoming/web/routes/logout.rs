use crate::api::schemas::SuccessResponse;
use crate::modules::auth::adapter::incoming::web::cookies::SESSION_COOKIE_NAME;
use crate::modules::auth::application::use_cases::logout_admin::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
    #[schema(example = "/login")]
    redirect_to: String,
}

/// Admin logout
///
/// Revokes the current session token and clears the cookie. Always succeeds.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cleared", body = inline(SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let token = req
        .cookie(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty());

    info!(has_session = token.is_some(), "Admin logout");

    match data.auth.logout.execute(token).await {
        Ok(()) => {}
        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            // The cookie is still cleared; the token dies at its own expiry
            error!(error = %e, "Token revocation failed during logout");
        }
    }

    let mut response = ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
        redirect_to: "/login".to_string(),
    });
    if let Err(e) = response.add_cookie(&data.cookies.cleared_session_cookie()) {
        error!(error = %e, "Failed to clear session cookie");
    }
    response
}
