mod delete_project;
mod list_projects;
mod save_project;

pub use delete_project::{delete_project_handler, __path_delete_project_handler};
pub use list_projects::list_projects_handler;
pub use save_project::{create_project_handler, __path_create_project_handler, update_project_handler, __path_update_project_handler};
