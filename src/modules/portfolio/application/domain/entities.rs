use serde::Serialize;

use crate::modules::certificate::application::domain::entities::Certificate;
use crate::modules::experience::application::domain::entities::ExperienceLog;
use crate::modules::profile::application::domain::entities::Profile;
use crate::modules::project::application::domain::entities::ProjectWithTechs;
use crate::modules::tech_stack::application::domain::entities::TechStack;

/// Everything the public page shows, read in one pass.
///
/// A section whose query failed is empty; a failed profile read is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<ProjectWithTechs>,
    pub experience: Vec<ExperienceLog>,
    pub certificates: Vec<Certificate>,
    pub tech_stack: Vec<TechStack>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCounts {
    pub profile_loaded: bool,
    pub projects: usize,
    pub featured_projects: usize,
    pub experience: usize,
    pub certificates: usize,
    pub tech_stack: usize,
}

impl PortfolioSnapshot {
    pub fn counts(&self) -> SectionCounts {
        SectionCounts {
            profile_loaded: self.profile.is_some(),
            projects: self.projects.len(),
            featured_projects: self
                .projects
                .iter()
                .filter(|p| p.project.is_featured)
                .count(),
            experience: self.experience.len(),
            certificates: self.certificates.len(),
            tech_stack: self.tech_stack.len(),
        }
    }
}
