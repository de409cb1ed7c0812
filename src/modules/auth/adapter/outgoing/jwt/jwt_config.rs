use crate::shared::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub const DEFAULT_ISSUER: &'static str = "portfolio-console";

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 8 * 3600i64)?;
        if session_token_expiry <= 0 || session_token_expiry > 7 * 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 second and 7 days".to_string(),
            });
        }

        let issuer = optional("JWT_ISSUER").unwrap_or_else(|| Self::DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_token_expiry,
        })
    }
}
