use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::tech_stack::application::domain::entities::{
    TechCategory, TechRecord, TechStack,
};
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};

use super::sea_orm_entity::tech_stack::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct TechStackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechStackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TechStackRepositoryError {
    TechStackRepositoryError::DatabaseError(e.to_string())
}

/// `project_techs.tech_id` restricts deletes; Postgres reports it as 23503.
fn is_foreign_key_violation(e: &DbErr) -> bool {
    if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }
    e.to_string().contains("SQLSTATE 23503")
}

fn to_tech(model: Model) -> Result<TechStack, TechStackRepositoryError> {
    let category = model
        .category
        .parse::<TechCategory>()
        .map_err(|e| TechStackRepositoryError::DatabaseError(e.to_string()))?;

    Ok(TechStack {
        id: model.id,
        name: model.name,
        category,
        icon_slug: model.icon_slug,
    })
}

#[async_trait]
impl TechStackRepository for TechStackRepositoryPostgres {
    async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError> {
        Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_tech)
            .collect()
    }

    async fn upsert(&self, record: TechRecord) -> Result<TechStack, TechStackRepositoryError> {
        let model = ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            category: Set(record.category.as_str().to_string()),
            icon_slug: Set(record.icon_slug),
            created_at: NotSet,
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Name, Column::Category, Column::IconSlug])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        to_tech(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechStackRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    TechStackRepositoryError::StillReferenced
                } else {
                    map_db_err(e)
                }
            })?;

        if result.rows_affected == 0 {
            return Err(TechStackRepositoryError::NotFound);
        }
        Ok(())
    }
}
