mod delete_project;
mod list_projects;
mod save_project;

pub use delete_project::DeleteProjectUseCase;
pub use list_projects::{ListProjectsError, ListProjectsUseCase};
pub use save_project::SaveProjectUseCase;
