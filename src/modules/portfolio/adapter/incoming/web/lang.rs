use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::shared::i18n::{Lang, UnsupportedLang};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LangQuery {
    /// `es` or `en`; overrides the `lang` cookie
    pub lang: Option<String>,
}

/// Explicit `?lang=` wins, then the cookie, then Spanish.
///
/// A bad query value is the caller's error; a bad cookie is ignored.
pub fn resolve_lang(query: Option<&str>, cookie: Option<&str>) -> Result<Lang, UnsupportedLang> {
    if let Some(raw) = query {
        return raw.parse();
    }

    match cookie.map(str::parse::<Lang>) {
        Some(Ok(lang)) => Ok(lang),
        Some(Err(e)) => {
            debug!(error = %e, "Ignoring unreadable lang cookie");
            Ok(Lang::default())
        }
        None => Ok(Lang::default()),
    }
}
