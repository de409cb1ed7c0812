pub mod project_query;
pub mod project_repository;
pub mod project_tech_repository;

pub use project_query::{ProjectQuery, ProjectQueryError};
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
pub use project_tech_repository::{ProjectTechRepository, ProjectTechRepositoryError};
