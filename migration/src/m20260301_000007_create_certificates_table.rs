use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Certificates::TitleEs).string_len(200))
                    .col(ColumnDef::new(Certificates::TitleEn).string_len(200))
                    .col(ColumnDef::new(Certificates::Issuer).string_len(150).not_null())
                    .col(ColumnDef::new(Certificates::IssueDate).date().not_null())
                    .col(ColumnDef::new(Certificates::CredentialUrl).text())
                    .col(ColumnDef::new(Certificates::ImageUrl).text())
                    .col(
                        ColumnDef::new(Certificates::Category)
                            .string_len(100)
                            .not_null()
                            .default("General"),
                    )
                    .col(
                        ColumnDef::new(Certificates::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
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
                CREATE INDEX idx_certificates_issue_date
                ON certificates (issue_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    TitleEs,
    TitleEn,
    Issuer,
    IssueDate,
    CredentialUrl,
    ImageUrl,
    Category,
    DisplayOrder,
    CreatedAt,
}
