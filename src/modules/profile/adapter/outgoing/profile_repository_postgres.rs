use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::profile::application::domain::entities::{Profile, ProfileChange};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::shared::i18n::Bilingual;

use super::sea_orm_entity::profile::{ActiveModel, Entity, Model};

/// Primary key of the seeded profile row.
const PROFILE_SINGLETON_ID: Uuid = Uuid::from_u128(1);

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn unchanged() -> ActiveModel {
        ActiveModel {
            id: Set(PROFILE_SINGLETON_ID),
            full_name: NotSet,
            role_title_es: NotSet,
            role_title_en: NotSet,
            about_me_es: NotSet,
            about_me_en: NotSet,
            avatar_url: NotSet,
            cv_pdf_url: NotSet,
            contact_email: NotSet,
            github_url: NotSet,
            linkedin_url: NotSet,
            whatsapp_url: NotSet,
            updated_at: NotSet,
        }
    }

    fn to_active_model(change: ProfileChange) -> ActiveModel {
        let mut model = Self::unchanged();
        match change {
            ProfileChange::Details(details) => {
                model.full_name = Set(details.full_name);
                model.role_title_es = Set(details.role_title.es);
                model.role_title_en = Set(details.role_title.en);
                model.about_me_es = Set(details.about_me.es);
                model.about_me_en = Set(details.about_me.en);
                model.contact_email = Set(Some(details.contact_email));
                model.github_url = Set(details.github_url);
                model.linkedin_url = Set(details.linkedin_url);
                model.whatsapp_url = Set(details.whatsapp_url);
            }
            ProfileChange::AvatarUrl(url) => model.avatar_url = Set(Some(url)),
            ProfileChange::CvPdfUrl(url) => model.cv_pdf_url = Set(Some(url)),
        }
        model
    }

    fn to_profile(model: Model) -> Profile {
        Profile {
            full_name: model.full_name,
            role_title: Bilingual::new(model.role_title_es, model.role_title_en),
            about_me: Bilingual::new(model.about_me_es, model.about_me_en),
            avatar_url: model.avatar_url,
            cv_pdf_url: model.cv_pdf_url,
            contact_email: model.contact_email,
            github_url: model.github_url,
            linkedin_url: model.linkedin_url,
            whatsapp_url: model.whatsapp_url,
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ProfileRepositoryError::NotSeeded,
        other => ProfileRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_singleton(&self) -> Result<Profile, ProfileRepositoryError> {
        Entity::find_by_id(PROFILE_SINGLETON_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(Self::to_profile)
            .ok_or(ProfileRepositoryError::NotSeeded)
    }

    async fn update_singleton(
        &self,
        change: ProfileChange,
    ) -> Result<Profile, ProfileRepositoryError> {
        // UPDATE only: the row is seeded by migration and never inserted here
        let updated = Self::to_active_model(change)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Self::to_profile(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::ProfileDetails;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn update_sql(db: Arc<DatabaseConnection>) -> String {
        let log = Arc::try_unwrap(db)
            .ok()
            .expect("repository dropped")
            .into_transaction_log();
        assert_eq!(log.len(), 1);
        log[0].statements()[0].sql.clone()
    }

    fn row() -> Model {
        Model {
            id: PROFILE_SINGLETON_ID,
            full_name: "Ana Torres".into(),
            role_title_es: Some("Ingeniera de Software".into()),
            role_title_en: Some("Software Engineer".into()),
            about_me_es: None,
            about_me_en: Some("I build things.".into()),
            avatar_url: Some("https://cdn/a.webp".into()),
            cv_pdf_url: None,
            contact_email: Some("ana@example.com".into()),
            github_url: None,
            linkedin_url: None,
            whatsapp_url: None,
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn singleton_id_matches_the_seeded_row() {
        assert_eq!(
            PROFILE_SINGLETON_ID.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }

    #[tokio::test]
    async fn reads_the_seeded_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row()]])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let profile = repo.get_singleton().await.unwrap();

        assert_eq!(profile.full_name, "Ana Torres");
        assert_eq!(profile.role_title.en.as_deref(), Some("Software Engineer"));
        assert_eq!(profile.about_me.es, None);
    }

    #[tokio::test]
    async fn missing_row_is_not_seeded() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.get_singleton().await,
            Err(ProfileRepositoryError::NotSeeded)
        );
    }

    #[tokio::test]
    async fn avatar_change_updates_only_that_column() {
        let mut updated = row();
        updated.avatar_url = Some("https://cdn/b.webp".into());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();
        let db = Arc::new(db);
        let repo = ProfileRepositoryPostgres::new(db.clone());

        let profile = repo
            .update_singleton(ProfileChange::AvatarUrl("https://cdn/b.webp".into()))
            .await
            .unwrap();
        assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn/b.webp"));
        drop(repo);

        let sql = update_sql(db);
        assert!(sql.contains(r#""avatar_url" = $"#));
        assert!(!sql.contains(r#""full_name" = $"#));
    }

    #[tokio::test]
    async fn details_change_writes_every_scalar_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row()]])
            .into_connection();
        let db = Arc::new(db);
        let repo = ProfileRepositoryPostgres::new(db.clone());

        let details = ProfileDetails {
            full_name: "Ana Torres".into(),
            role_title: Bilingual::new(Some("Ingeniera".into()), Some("Engineer".into())),
            about_me: Bilingual::default(),
            contact_email: "ana@example.com".into(),
            github_url: None,
            linkedin_url: None,
            whatsapp_url: None,
        };
        repo.update_singleton(ProfileChange::Details(details))
            .await
            .unwrap();
        drop(repo);

        let sql = update_sql(db);
        assert!(sql.contains(r#""full_name" = $"#));
        assert!(sql.contains(r#""contact_email" = $"#));
        assert!(!sql.contains(r#""avatar_url" = $"#));
    }

    #[tokio::test]
    async fn database_errors_are_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".into())])
            .into_connection();
        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let err = repo
            .update_singleton(ProfileChange::CvPdfUrl("https://cdn/cv.pdf".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileRepositoryError::DatabaseError(msg) if msg.contains("connection reset")));
    }
}
