use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cookie (and query parameter) carrying the visitor's language choice.
pub const LANG_COOKIE_NAME: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    pub fn other(&self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language: {0}")]
pub struct UnsupportedLang(pub String);

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(UnsupportedLang(other.to_string())),
        }
    }
}

/// A text field stored once per language; either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub es: Option<String>,
    pub en: Option<String>,
}

impl Bilingual {
    pub fn new(es: Option<String>, en: Option<String>) -> Self {
        Self { es, en }
    }

    pub fn get(&self, lang: Lang) -> Option<&str> {
        let value = match lang {
            Lang::Es => self.es.as_deref(),
            Lang::En => self.en.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Active language, then the other one, then `placeholder`.
    pub fn localize(&self, lang: Lang, placeholder: &str) -> String {
        self.get(lang)
            .or_else(|| self.get(lang.other()))
            .unwrap_or(placeholder)
            .to_string()
    }
}
