use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Load `.env.{RUST_ENV}` first, then fall back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

pub fn is_production() -> bool {
    env::var("RUST_ENV").as_deref() == Ok("production")
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match optional(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("cannot parse '{raw}'"),
        }),
    }
}

/// Bootstrap credentials for the first admin account.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub api_key: String,
    pub bucket: String,
}

impl StorageConfig {
    pub const DEFAULT_BUCKET: &'static str = "portfolio-assets";

    /// Public object URLs are `<public_base>/<bucket>/<path>`.
    pub fn public_base(&self) -> String {
        format!(
            "{}/storage/v1/object/public",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub redis_url: String,
    pub storage: StorageConfig,
    pub secure_cookies: bool,
    pub admin_bootstrap: Option<AdminBootstrap>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = StorageConfig {
            base_url: required("STORAGE_URL")?,
            api_key: required("STORAGE_API_KEY")?,
            bucket: optional("STORAGE_BUCKET")
                .unwrap_or_else(|| StorageConfig::DEFAULT_BUCKET.to_string()),
        };

        let admin_bootstrap = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                full_name: optional("ADMIN_FULL_NAME")
                    .unwrap_or_else(|| "Administrator".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: parse_or("PORT", 8080u16)?,
            redis_url: required("REDIS_URL")?,
            storage,
            secure_cookies: parse_or("SESSION_COOKIE_SECURE", is_production())?,
            admin_bootstrap,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
