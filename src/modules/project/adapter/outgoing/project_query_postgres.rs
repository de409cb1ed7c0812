use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{LinkedTech, ProjectWithTechs};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

use super::project_repository_postgres::model_to_project;
use super::sea_orm_entity::projects::{Column, Entity};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn links_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT pt.project_id, ts.id AS tech_id, ts.name
            FROM project_techs pt
            JOIN tech_stack ts ON ts.id = pt.tech_id
            ORDER BY ts.name ASC
            "#,
        )
    }

    async fn links_by_project(&self) -> Result<HashMap<Uuid, Vec<LinkedTech>>, ProjectQueryError> {
        let rows = self
            .db
            .query_all(Self::links_stmt())
            .await
            .map_err(map_db_err)?;

        let mut by_project: HashMap<Uuid, Vec<LinkedTech>> = HashMap::new();
        for row in rows {
            let project_id: Uuid = row.try_get("", "project_id").map_err(map_db_err)?;
            let tech = LinkedTech {
                id: row.try_get("", "tech_id").map_err(map_db_err)?,
                name: row.try_get("", "name").map_err(map_db_err)?,
            };
            by_project.entry(project_id).or_default().push(tech);
        }
        Ok(by_project)
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_with_techs(&self) -> Result<Vec<ProjectWithTechs>, ProjectQueryError> {
        let projects = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut links = self.links_by_project().await?;

        Ok(projects
            .into_iter()
            .map(|model| {
                let techs = links.remove(&model.id).unwrap_or_default();
                ProjectWithTechs {
                    project: model_to_project(model),
                    techs,
                }
            })
            .collect())
    }
}
