pub mod certificate_repository_postgres;
pub mod sea_orm_entity;

pub use certificate_repository_postgres::CertificateRepositoryPostgres;
