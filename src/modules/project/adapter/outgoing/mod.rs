pub mod project_query_postgres;
pub mod project_repository_postgres;
pub mod project_tech_repository_postgres;
pub mod sea_orm_entity;

pub use project_query_postgres::ProjectQueryPostgres;
pub use project_repository_postgres::ProjectRepositoryPostgres;
pub use project_tech_repository_postgres::ProjectTechRepositoryPostgres;
