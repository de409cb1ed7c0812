pub mod project_techs;
pub mod projects;
