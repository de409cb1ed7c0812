use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::tech_stack::application::domain::entities::{TechForm, TechStack};
use crate::modules::tech_stack::application::ports::incoming::use_cases::SaveTechStackUseCase;
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};
use crate::shared::workflow::{EditorError, SaveStep};

/// Technologies carry no assets, so a save is a single upsert.
pub struct SaveTechStackService<R>
where
    R: TechStackRepository,
{
    repository: R,
}

impl<R> SaveTechStackService<R>
where
    R: TechStackRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SaveTechStackUseCase for SaveTechStackService<R>
where
    R: TechStackRepository,
{
    async fn execute(&self, form: TechForm) -> Result<TechStack, EditorError> {
        let record = form.validate().map_err(EditorError::Invalid)?;
        let id = record.id;

        match self.repository.upsert(record).await {
            Ok(tech) => {
                info!(tech_id = %tech.id, name = %tech.name, "Technology saved");
                Ok(tech)
            }
            Err(TechStackRepositoryError::NotFound) => Err(EditorError::NotFound("Technology")),
            Err(e) => {
                error!(tech_id = %id, step = %SaveStep::UpsertRecord, "Technology save failed: {}", e);
                Err(EditorError::store(SaveStep::UpsertRecord, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tech_stack::application::domain::entities::TechCategory;
    use crate::tests::support::in_memory::{InMemoryRecordStore, StoreCall};

    fn form(name: &str) -> TechForm {
        TechForm {
            id: None,
            name: name.into(),
            category: "tools".into(),
            icon_slug: "docker".into(),
        }
    }

    #[tokio::test]
    async fn creates_a_new_technology() {
        let store = InMemoryRecordStore::default();

        let tech = SaveTechStackService::new(store.clone())
            .execute(form("Docker"))
            .await
            .unwrap();

        assert_eq!(tech.category, TechCategory::Tools);
        assert_eq!(store.tech_names(), vec!["Docker"]);
    }

    #[tokio::test]
    async fn edit_overwrites_the_same_row() {
        let store = InMemoryRecordStore::default();
        let existing = store.seed_tech("Dockr", TechCategory::Tools);

        SaveTechStackService::new(store.clone())
            .execute(TechForm {
                id: Some(existing.id),
                ..form("Docker")
            })
            .await
            .unwrap();

        assert_eq!(store.tech_names(), vec!["Docker"]);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_store() {
        let store = InMemoryRecordStore::default();
        store.fail_on(StoreCall::UpsertTech, "must not be called");

        let err = SaveTechStackService::new(store)
            .execute(TechForm::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EditorError::Invalid(fields) if fields.len() == 3));
    }

    #[tokio::test]
    async fn store_failure_names_the_upsert_step() {
        let store = InMemoryRecordStore::default();
        store.fail_on(StoreCall::UpsertTech, "duplicate key value");

        let err = SaveTechStackService::new(store)
            .execute(form("Docker"))
            .await
            .unwrap_err();

        assert_eq!(err.step(), Some(SaveStep::UpsertRecord));
    }
}
