mod delete_tech_stack_service;
mod list_tech_stack_service;
mod save_tech_stack_service;

pub use delete_tech_stack_service::DeleteTechStackService;
pub use list_tech_stack_service::ListTechStackService;
pub use save_tech_stack_service::SaveTechStackService;
