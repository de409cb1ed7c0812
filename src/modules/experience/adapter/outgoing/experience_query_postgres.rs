use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::experience::application::domain::entities::ExperienceLog;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};
use crate::shared::i18n::Bilingual;

use super::sea_orm_entity::experience_logs::{Column, Entity, Model};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<Model> for ExperienceLog {
    fn from(model: Model) -> Self {
        ExperienceLog {
            id: model.id,
            company_name: model.company_name,
            role: Bilingual::new(model.role_es, model.role_en),
            description: Bilingual::new(model.description_es, model.description_en),
            start_date: model.start_date,
        }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceLog>, ExperienceQueryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(ExperienceLog::from).collect())
    }
}
