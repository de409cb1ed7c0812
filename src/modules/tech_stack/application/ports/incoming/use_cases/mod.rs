mod delete_tech_stack;
mod list_tech_stack;
mod save_tech_stack;

pub use delete_tech_stack::DeleteTechStackUseCase;
pub use list_tech_stack::{ListTechStackError, ListTechStackUseCase};
pub use save_tech_stack::SaveTechStackUseCase;
