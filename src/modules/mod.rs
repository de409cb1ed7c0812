pub mod asset;
pub mod auth;
pub mod certificate;
pub mod experience;
pub mod portfolio;
pub mod profile;
pub mod project;
pub mod tech_stack;
