pub mod app_state_builder;
pub mod in_memory;
pub mod stubs;

use actix_web::cookie::Cookie;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::SESSION_COOKIE_NAME;
use crate::modules::auth::application::ports::outgoing::TokenProvider;
use stubs::FixedTokenProvider;

/// A session cookie the default test state accepts.
pub fn admin_cookie() -> Cookie<'static> {
    let issued = FixedTokenProvider::default()
        .generate_session_token(Uuid::new_v4())
        .expect("test token");
    Cookie::new(SESSION_COOKIE_NAME, issued.token)
}
