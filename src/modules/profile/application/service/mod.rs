mod get_profile_service;
mod replace_profile_asset_service;
mod update_profile_service;

pub use get_profile_service::GetProfileService;
pub use replace_profile_asset_service::ReplaceProfileAssetService;
pub use update_profile_service::UpdateProfileService;
