mod admin_overview;
mod get_portfolio;
mod set_language;

pub use admin_overview::{admin_overview_handler, __path_admin_overview_handler};
pub use get_portfolio::{get_portfolio_handler, __path_get_portfolio_handler};
pub use set_language::{set_language_handler, __path_set_language_handler, LanguageResponse};
