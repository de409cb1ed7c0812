use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpMessage, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::modules::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;

/// The session resolved by the gate for this request.
#[derive(Debug, Clone)]
pub struct AdminSessionGuard(pub AdminSession);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSessionGuard {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AdminSession>() {
            Some(session) => ready(Ok(AdminSessionGuard(session.clone()))),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "NO_SESSION",
                "An admin session is required",
            )))),
        }
    }
}
