use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechStack::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStack::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStack::Name).string_len(100).not_null())
                    .col(ColumnDef::new(TechStack::Category).string_len(20).not_null())
                    .col(ColumnDef::new(TechStack::IconSlug).string_len(100).not_null())
                    .col(
                        ColumnDef::new(TechStack::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE tech_stack
                ADD CONSTRAINT chk_tech_stack_category
                CHECK (category IN ('FRONTEND', 'BACKEND', 'DATABASE', 'DEVOPS', 'TOOLS'));
                "#,
            )
            .await?;

        // Catalog is listed grouped by category
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_tech_stack_category_name
                ON tech_stack (category, name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_tech_stack_category_name")
            .await?;

        manager
            .drop_table(Table::drop().table(TechStack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStack {
    Table,
    Id,
    Name,
    Category,
    IconSlug,
    CreatedAt,
}
