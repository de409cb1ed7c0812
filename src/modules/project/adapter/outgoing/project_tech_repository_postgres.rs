use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{
    ProjectTechRepository, ProjectTechRepositoryError,
};

use super::sea_orm_entity::project_techs::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct ProjectTechRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectTechRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectTechRepositoryError {
    ProjectTechRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectTechRepository for ProjectTechRepositoryPostgres {
    async fn clear_for_project(&self, project_id: Uuid) -> Result<u64, ProjectTechRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::ProjectId.eq(project_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn insert_links(
        &self,
        project_id: Uuid,
        tech_ids: &[Uuid],
    ) -> Result<(), ProjectTechRepositoryError> {
        if tech_ids.is_empty() {
            return Ok(());
        }

        let rows = tech_ids.iter().map(|tech_id| ActiveModel {
            project_id: Set(project_id),
            tech_id: Set(*tech_id),
        });

        Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([Column::ProjectId, Column::TechId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
