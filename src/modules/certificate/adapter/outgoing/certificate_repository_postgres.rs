use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certificate::application::domain::entities::{
    Certificate, CertificateRecord,
};
use crate::modules::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::shared::i18n::Bilingual;

use super::sea_orm_entity::certificates::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    CertificateRepositoryError::DatabaseError(e.to_string())
}

fn to_certificate(model: Model) -> Certificate {
    Certificate {
        id: model.id,
        title: Bilingual::new(model.title_es, model.title_en),
        issuer: model.issuer,
        issue_date: model.issue_date,
        credential_url: model.credential_url,
        image_url: model.image_url,
        category: model.category,
        display_order: model.display_order,
    }
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certificate>, CertificateRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::IssueDate)
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(to_certificate).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, CertificateRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(to_certificate))
    }

    async fn upsert(
        &self,
        record: CertificateRecord,
    ) -> Result<Certificate, CertificateRepositoryError> {
        let model = ActiveModel {
            id: Set(record.id),
            title_es: Set(record.title.es),
            title_en: Set(record.title.en),
            issuer: Set(record.issuer),
            issue_date: Set(record.issue_date),
            credential_url: Set(record.credential_url),
            image_url: Set(record.image_url),
            category: Set(record.category),
            display_order: Set(record.display_order),
            created_at: NotSet,
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::TitleEs,
                        Column::TitleEn,
                        Column::Issuer,
                        Column::IssueDate,
                        Column::CredentialUrl,
                        Column::ImageUrl,
                        Column::Category,
                        Column::DisplayOrder,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(to_certificate(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }
        Ok(())
    }
}
