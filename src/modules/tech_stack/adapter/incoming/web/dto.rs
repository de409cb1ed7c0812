use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{
    TechCategory, TechForm, TechStack,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TechResponse {
    pub id: Uuid,
    #[schema(example = "Rust")]
    pub name: String,
    pub category: TechCategory,
    #[schema(example = "rust")]
    pub icon_slug: String,
}

impl From<TechStack> for TechResponse {
    fn from(t: TechStack) -> Self {
        Self {
            id: t.id,
            name: t.name,
            category: t.category,
            icon_slug: t.icon_slug,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TechRequest {
    #[serde(default)]
    pub name: String,
    /// Case-insensitive; stored uppercase
    #[serde(default)]
    #[schema(example = "backend")]
    pub category: String,
    #[serde(default)]
    pub icon_slug: String,
}

impl TechRequest {
    pub fn into_form(self, id: Option<Uuid>) -> TechForm {
        TechForm {
            id,
            name: self.name,
            category: self.category,
            icon_slug: self.icon_slug,
        }
    }
}

/// The saved row plus the refreshed catalog. The list is omitted when the
/// re-read fails after a successful save.
#[derive(Debug, Serialize, ToSchema)]
pub struct TechSaveResponse {
    pub saved: TechResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<TechResponse>>,
}
