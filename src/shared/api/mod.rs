pub mod confirm;
pub mod editor_response;
pub mod json_config;
pub mod response;

pub use confirm::ConfirmQuery;
pub use editor_response::{editor_error_response, guarded_save_response};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
