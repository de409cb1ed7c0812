use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An account allowed into the admin area.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub password_hash: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// A signed session token and the moment it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// The resolved session of the current request.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSession {
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    /// Set when the token was close to expiry and has been re-issued.
    #[serde(skip)]
    pub refreshed: Option<IssuedToken>,
}
