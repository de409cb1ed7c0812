use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::entities::ExperienceLog;

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub company_name: String,
    pub role_es: Option<String>,
    pub role_en: Option<String>,
    pub description_es: Option<String>,
    pub description_en: Option<String>,
    #[schema(value_type = String, example = "2022-09-01")]
    pub start_date: NaiveDate,
}

impl From<ExperienceLog> for ExperienceResponse {
    fn from(log: ExperienceLog) -> Self {
        Self {
            id: log.id,
            company_name: log.company_name,
            role_es: log.role.es,
            role_en: log.role.en,
            description_es: log.description.es,
            description_en: log.description.en,
            start_date: log.start_date,
        }
    }
}
