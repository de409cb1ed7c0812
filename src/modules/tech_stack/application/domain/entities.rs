use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{FieldError, FieldValidator};

/// Variant order matches the stored strings' alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TechCategory {
    Backend,
    Database,
    Devops,
    Frontend,
    Tools,
}

impl TechCategory {
    pub const ALL: [TechCategory; 5] = [
        TechCategory::Backend,
        TechCategory::Database,
        TechCategory::Devops,
        TechCategory::Frontend,
        TechCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "FRONTEND",
            TechCategory::Backend => "BACKEND",
            TechCategory::Database => "DATABASE",
            TechCategory::Devops => "DEVOPS",
            TechCategory::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for TechCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tech category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TechCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        TechCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One entry of the technology catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechStack {
    pub id: Uuid,
    pub name: String,
    pub category: TechCategory,
    pub icon_slug: String,
}

/// Technology form as typed by the admin.
#[derive(Debug, Clone, Default)]
pub struct TechForm {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub icon_slug: String,
}

/// Validated row to upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechRecord {
    pub id: Uuid,
    pub name: String,
    pub category: TechCategory,
    pub icon_slug: String,
}

const CATEGORY_HINT: &str = "Must be one of FRONTEND, BACKEND, DATABASE, DEVOPS, TOOLS";

impl TechForm {
    pub fn validate(self) -> Result<TechRecord, Vec<FieldError>> {
        let mut validator = FieldValidator::new();
        validator
            .required("name", &self.name)
            .required("icon_slug", &self.icon_slug);

        let category = self.category.parse::<TechCategory>().ok();
        if category.is_none() {
            validator.reject("category", CATEGORY_HINT);
        }
        validator.finish()?;
        let category = category.ok_or_else(|| vec![FieldError::new("category", CATEGORY_HINT)])?;

        Ok(TechRecord {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.trim().to_string(),
            category,
            icon_slug: self.icon_slug.trim().to_lowercase(),
        })
    }
}
