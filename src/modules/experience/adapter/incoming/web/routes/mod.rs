mod list_experience;

pub use list_experience::{list_experience_handler, __path_list_experience_handler};
