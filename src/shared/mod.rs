pub mod api;
pub mod config;
pub mod i18n;
pub mod validation;
pub mod workflow;
