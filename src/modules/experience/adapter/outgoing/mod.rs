pub mod experience_query_postgres;
pub mod sea_orm_entity;

pub use experience_query_postgres::ExperienceQueryPostgres;
