mod delete_tech;
mod list_tech;
mod save_tech;

pub use delete_tech::{delete_tech_handler, __path_delete_tech_handler};
pub use list_tech::list_tech_handler;
pub use save_tech::{create_tech_handler, __path_create_tech_handler, update_tech_handler, __path_update_tech_handler};
