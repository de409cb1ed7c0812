mod get_profile;
mod replace_profile_asset;
mod update_profile;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use replace_profile_asset::ReplaceProfileAssetUseCase;
pub use update_profile::UpdateProfileUseCase;
