use async_trait::async_trait;
use std::fmt::Display;
use tracing::warn;

use crate::modules::certificate::application::ports::outgoing::CertificateRepository;
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::portfolio::application::domain::entities::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::incoming::use_cases::ComposePortfolioUseCase;
use crate::modules::profile::application::ports::outgoing::ProfileRepository;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::tech_stack::application::ports::outgoing::TechStackRepository;

/// Reads the five sections concurrently.
pub struct ComposePortfolioService<P, Q, E, C, T>
where
    P: ProfileRepository,
    Q: ProjectQuery,
    E: ExperienceQuery,
    C: CertificateRepository,
    T: TechStackRepository,
{
    profile: P,
    projects: Q,
    experience: E,
    certificates: C,
    tech_stack: T,
}

impl<P, Q, E, C, T> ComposePortfolioService<P, Q, E, C, T>
where
    P: ProfileRepository,
    Q: ProjectQuery,
    E: ExperienceQuery,
    C: CertificateRepository,
    T: TechStackRepository,
{
    pub fn new(profile: P, projects: Q, experience: E, certificates: C, tech_stack: T) -> Self {
        Self {
            profile,
            projects,
            experience,
            certificates,
            tech_stack,
        }
    }
}

fn section<V, E: Display>(name: &'static str, result: Result<V, E>) -> Option<V> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(section = name, error = %e, "Portfolio section unavailable; rendering it empty");
            None
        }
    }
}

#[async_trait]
impl<P, Q, E, C, T> ComposePortfolioUseCase for ComposePortfolioService<P, Q, E, C, T>
where
    P: ProfileRepository,
    Q: ProjectQuery,
    E: ExperienceQuery,
    C: CertificateRepository,
    T: TechStackRepository,
{
    async fn snapshot(&self) -> PortfolioSnapshot {
        let (profile, projects, experience, certificates, tech_stack) = futures::join!(
            self.profile.get_singleton(),
            self.projects.list_with_techs(),
            self.experience.list(),
            self.certificates.list(),
            self.tech_stack.list(),
        );

        PortfolioSnapshot {
            profile: section("profile", profile),
            projects: section("projects", projects).unwrap_or_default(),
            experience: section("experience", experience).unwrap_or_default(),
            certificates: section("certificates", certificates).unwrap_or_default(),
            tech_stack: section("tech_stack", tech_stack).unwrap_or_default(),
        }
    }
}
