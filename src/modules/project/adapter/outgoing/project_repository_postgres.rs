use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectRecord};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::i18n::Bilingual;

use super::sea_orm_entity::projects::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

pub(crate) fn model_to_project(model: Model) -> Project {
    Project {
        id: model.id,
        title: Bilingual::new(model.title_es, model.title_en),
        description: Bilingual::new(model.description_es, model.description_en),
        content: Bilingual::new(model.content_es, model.content_en),
        live_url: model.live_url,
        repo_url: model.repo_url,
        image_url: model.image_url,
        is_featured: model.is_featured,
        display_order: model.display_order,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

fn record_to_active_model(record: ProjectRecord) -> ActiveModel {
    ActiveModel {
        id: Set(record.id),
        title_es: Set(record.title.es),
        title_en: Set(record.title.en),
        description_es: Set(record.description.es),
        description_en: Set(record.description.en),
        content_es: Set(record.content.es),
        content_en: Set(record.content.en),
        live_url: Set(record.live_url),
        repo_url: Set(record.repo_url),
        image_url: Set(record.image_url),
        is_featured: Set(record.is_featured),
        display_order: Set(record.display_order),
        created_at: NotSet,
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(model_to_project))
    }

    async fn upsert(&self, record: ProjectRecord) -> Result<Project, ProjectRepositoryError> {
        let saved = Entity::insert(record_to_active_model(record))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::TitleEs,
                        Column::TitleEn,
                        Column::DescriptionEs,
                        Column::DescriptionEn,
                        Column::ContentEs,
                        Column::ContentEn,
                        Column::LiveUrl,
                        Column::RepoUrl,
                        Column::ImageUrl,
                        Column::IsFeatured,
                        Column::DisplayOrder,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_project(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}
