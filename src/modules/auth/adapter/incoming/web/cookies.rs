use actix_web::cookie::{time::Duration, Cookie, SameSite};
use chrono::Utc;

use crate::modules::auth::application::domain::entities::IssuedToken;
use crate::shared::i18n::{Lang, LANG_COOKIE_NAME};

pub const SESSION_COOKIE_NAME: &str = "portfolio_session";

const LANG_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Attributes shared by every cookie the server sets.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub secure: bool,
}

impl CookieSettings {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// HttpOnly session cookie living exactly as long as the token.
    pub fn session_cookie(&self, issued: &IssuedToken) -> Cookie<'static> {
        let remaining = (issued.expires_at - Utc::now()).num_seconds().max(0);

        Cookie::build(SESSION_COOKIE_NAME, issued.token.clone())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(remaining))
            .finish()
    }

    pub fn cleared_session_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .finish();
        cookie.make_removal();
        cookie
    }

    /// Readable by the page so the UI can render without a round trip.
    pub fn lang_cookie(&self, lang: Lang) -> Cookie<'static> {
        Cookie::build(LANG_COOKIE_NAME, lang.as_str())
            .path("/")
            .http_only(false)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(LANG_COOKIE_MAX_AGE_DAYS))
            .finish()
    }
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self { secure: true }
    }
}
