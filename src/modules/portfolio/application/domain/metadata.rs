use serde::Serialize;

use crate::modules::profile::application::domain::entities::Profile;

const DEFAULT_NAME: &str = "Portfolio";
const DEFAULT_ROLE_EN: &str = "Developer";
const DEFAULT_ROLE_ES: &str = "Desarrollador";
const UNAVAILABLE_TITLE: &str = "Portfolio | Developer";
const UNAVAILABLE_DESCRIPTION: &str = "Software Developer Portfolio";

/// Document title and description of the public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    /// Always English-first, whatever the visitor's language.
    pub fn for_profile(profile: Option<&Profile>) -> Self {
        let Some(profile) = profile else {
            return Self {
                title: UNAVAILABLE_TITLE.to_string(),
                description: UNAVAILABLE_DESCRIPTION.to_string(),
            };
        };

        let name = match profile.full_name.trim() {
            "" => DEFAULT_NAME,
            name => name,
        };
        let role_en = profile
            .role_title
            .en
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_ROLE_EN);
        let role_es = profile
            .role_title
            .es
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_ROLE_ES);

        Self {
            title: format!("{name} | {role_en}"),
            description: format!("{role_en} • {role_es}"),
        }
    }
}
