use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::LOCATION,
    middleware::Next,
    web, Error, HttpMessage, HttpResponse,
};
use tracing::{debug, error, warn};

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::AppState;

use super::cookies::SESSION_COOKIE_NAME;

pub const ADMIN_PATH: &str = "/admin";
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateArea {
    Admin,
    Login,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Redirect(&'static str),
}

/// `true` for `prefix` itself and anything below `prefix/`.
fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn classify(path: &str) -> GateArea {
    if is_under(path, ADMIN_PATH) {
        GateArea::Admin
    } else if is_under(path, LOGIN_PATH) {
        GateArea::Login
    } else {
        GateArea::Open
    }
}

pub fn decide(area: GateArea, has_session: bool) -> GateDecision {
    match (area, has_session) {
        (GateArea::Admin, false) => GateDecision::Redirect(LOGIN_PATH),
        (GateArea::Login, true) => GateDecision::Redirect(ADMIN_PATH),
        _ => GateDecision::Pass,
    }
}

async fn resolve(req: &ServiceRequest, state: &AppState) -> Option<AdminSession> {
    let token = req.cookie(SESSION_COOKIE_NAME)?.value().to_string();
    if token.is_empty() {
        return None;
    }

    match state.auth.sessions.resolve(&token).await {
        Ok(session) => session,
        Err(e) => {
            // Unreachable revocation store: fail closed
            warn!(path = %req.path(), "Session resolution failed: {}", e);
            None
        }
    }
}

/// Route-level access control for the admin area.
///
/// Runs on every request: resolves the session cookie, redirects with
/// `307` where the area and session state disagree, and otherwise hands
/// the resolved session to handlers through request extensions.
pub async fn session_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
        error!("AppState missing from app data; session gate cannot resolve sessions");
        return Ok(req
            .into_response(HttpResponse::InternalServerError().finish())
            .map_into_boxed_body());
    };

    let area = classify(req.path());
    let session = match area {
        GateArea::Open if req.cookie(SESSION_COOKIE_NAME).is_none() => None,
        _ => resolve(&req, &state).await,
    };

    if let GateDecision::Redirect(location) = decide(area, session.is_some()) {
        debug!(path = %req.path(), location, "Session gate redirect");
        let response = HttpResponse::TemporaryRedirect()
            .insert_header((LOCATION, location))
            .finish();
        return Ok(req.into_response(response).map_into_boxed_body());
    }

    let refreshed = session.as_ref().and_then(|s| s.refreshed.clone());
    if let Some(session) = session {
        req.extensions_mut().insert(session);
    }

    let mut res = next.call(req).await?;

    if let Some(issued) = refreshed {
        res.response_mut()
            .add_cookie(&state.cookies.session_cookie(&issued))?;
    }

    Ok(res.map_into_boxed_body())
}
