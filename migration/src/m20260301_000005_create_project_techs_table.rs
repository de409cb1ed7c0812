use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create project_techs join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectTechs::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectTechs::TechId).uuid().not_null())
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(ProjectTechs::ProjectId)
                            .col(ProjectTechs::TechId),
                    )
                    // FK → projects
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_techs_project_id")
                            .from(ProjectTechs::Table, ProjectTechs::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → tech_stack; a referenced technology cannot be removed
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_techs_tech_id")
                            .from(ProjectTechs::Table, ProjectTechs::TechId)
                            .to(TechStack::Table, TechStack::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all projects for a technology
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_project_techs_tech_id
                ON project_techs (tech_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_project_techs_tech_id")
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectTechs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectTechs {
    Table,
    ProjectId,
    TechId,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
}
