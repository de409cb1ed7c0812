use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExperienceLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ExperienceLogs::CompanyName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceLogs::RoleEs).string_len(150))
                    .col(ColumnDef::new(ExperienceLogs::RoleEn).string_len(150))
                    .col(ColumnDef::new(ExperienceLogs::DescriptionEs).text())
                    .col(ColumnDef::new(ExperienceLogs::DescriptionEn).text())
                    .col(ColumnDef::new(ExperienceLogs::StartDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_experience_logs_start_date
                ON experience_logs (start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExperienceLogs {
    Table,
    Id,
    CompanyName,
    RoleEs,
    RoleEn,
    DescriptionEs,
    DescriptionEn,
    StartDate,
}
