mod delete_project_service;
mod list_projects_service;
mod save_project_service;

pub use delete_project_service::DeleteProjectService;
pub use list_projects_service::ListProjectsService;
pub use save_project_service::SaveProjectService;
