use sea_orm_migration::prelude::*;

/// Fixed primary key of the one and only profile row.
const PROFILE_SINGLETON_ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profile table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profile::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profile::FullName).string_len(150).not_null())
                    .col(ColumnDef::new(Profile::RoleTitleEs).string_len(150))
                    .col(ColumnDef::new(Profile::RoleTitleEn).string_len(150))
                    .col(ColumnDef::new(Profile::AboutMeEs).text())
                    .col(ColumnDef::new(Profile::AboutMeEn).text())
                    .col(ColumnDef::new(Profile::AvatarUrl).text())
                    .col(ColumnDef::new(Profile::CvPdfUrl).text())
                    .col(ColumnDef::new(Profile::ContactEmail).string_len(255))
                    .col(ColumnDef::new(Profile::GithubUrl).text())
                    .col(ColumnDef::new(Profile::LinkedinUrl).text())
                    .col(ColumnDef::new(Profile::WhatsappUrl).text())
                    .col(
                        ColumnDef::new(Profile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // A second row can never be inserted
        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"
                ALTER TABLE profile
                ADD CONSTRAINT chk_profile_singleton
                CHECK (id = '{PROFILE_SINGLETON_ID}');
                "#
            ))
            .await?;

        manager
            .get_connection()
            .execute_unprepared(&format!(
                r#"
                INSERT INTO profile (id, full_name)
                VALUES ('{PROFILE_SINGLETON_ID}', '')
                ON CONFLICT (id) DO NOTHING;
                "#
            ))
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profile_updated_at
                BEFORE UPDATE ON profile
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profile_updated_at ON profile")
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    FullName,
    RoleTitleEs,
    RoleTitleEn,
    AboutMeEs,
    AboutMeEn,
    AvatarUrl,
    CvPdfUrl,
    ContactEmail,
    GithubUrl,
    LinkedinUrl,
    WhatsappUrl,
    UpdatedAt,
}
