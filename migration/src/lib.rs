pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_profile_table;
mod m20260301_000003_create_tech_stack_table;
mod m20260301_000004_create_projects_table;
mod m20260301_000005_create_project_techs_table;
mod m20260301_000006_create_experience_logs_table;
mod m20260301_000007_create_certificates_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_profile_table::Migration),
            Box::new(m20260301_000003_create_tech_stack_table::Migration),
            Box::new(m20260301_000004_create_projects_table::Migration),
            Box::new(m20260301_000005_create_project_techs_table::Migration),
            Box::new(m20260301_000006_create_experience_logs_table::Migration),
            Box::new(m20260301_000007_create_certificates_table::Migration),
        ]
    }
}
