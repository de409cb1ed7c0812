pub mod cookies;
pub mod extractors;
pub mod routes;
pub mod session_gate;

pub use cookies::{CookieSettings, SESSION_COOKIE_NAME};
pub use extractors::AdminSessionGuard;
pub use session_gate::session_gate;
