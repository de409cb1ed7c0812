mod get_profile;
mod replace_asset;
mod update_profile;

pub use get_profile::get_profile_handler;
pub use replace_asset::{replace_avatar_handler, __path_replace_avatar_handler, replace_cv_handler, __path_replace_cv_handler};
pub use update_profile::{update_profile_handler, __path_update_profile_handler};
