use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::shared::i18n::Bilingual;

/// One position in the work history. Maintained outside the admin editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceLog {
    pub id: Uuid,
    pub company_name: String,
    pub role: Bilingual,
    pub description: Bilingual,
    pub start_date: NaiveDate,
}
