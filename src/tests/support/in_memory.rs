//! In-memory stand-ins for the record store, the profile singleton and
//! object storage. They mirror the ordering and constraint behaviour of
//! the Postgres adapters closely enough for service and route tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::{AssetPath, FileUpload};
use crate::modules::asset::application::ports::outgoing::{AssetStore, AssetStoreError};
use crate::modules::asset::application::services::AssetLifecycle;
use crate::modules::certificate::application::domain::entities::{
    Certificate, CertificateRecord,
};
use crate::modules::certificate::application::ports::outgoing::{
    CertificateRepository, CertificateRepositoryError,
};
use crate::modules::experience::application::domain::entities::ExperienceLog;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};
use crate::modules::profile::application::domain::entities::{Profile, ProfileChange};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::project::application::domain::entities::{
    LinkedTech, Project, ProjectRecord, ProjectWithTechs,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
    ProjectTechRepository, ProjectTechRepositoryError,
};
use crate::modules::tech_stack::application::domain::entities::{
    TechCategory, TechRecord, TechStack,
};
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};
use crate::shared::config::StorageConfig;
use crate::shared::i18n::Bilingual;

use super::stubs::PassthroughCompressor;

const STORAGE_BASE: &str = "https://storage.test";

fn public_url(path: &str) -> String {
    format!(
        "{STORAGE_BASE}/storage/v1/object/public/{}/{path}",
        StorageConfig::DEFAULT_BUCKET
    )
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_profile() -> Profile {
    Profile {
        full_name: "Ana Torres".to_string(),
        role_title: Bilingual::new(
            Some("Ingeniera de Software".to_string()),
            Some("Software Engineer".to_string()),
        ),
        about_me: Bilingual::new(
            Some("Construyo servicios web confiables.".to_string()),
            Some("I build dependable web services.".to_string()),
        ),
        avatar_url: Some(public_url("uploads/avatar-seed.webp")),
        cv_pdf_url: Some(public_url("uploads/cv-seed.pdf")),
        contact_email: Some("ana@example.com".to_string()),
        github_url: Some("https://github.com/anatorres".to_string()),
        linkedin_url: None,
        whatsapp_url: None,
        updated_at: Utc::now(),
    }
}

pub fn sample_project() -> Project {
    let id = Uuid::new_v4();
    Project {
        id,
        title: Bilingual::new(Some("Tablero".to_string()), Some("Dashboard".to_string())),
        description: Bilingual::new(
            Some("Métricas en vivo".to_string()),
            Some("Live metrics".to_string()),
        ),
        content: Bilingual::new(
            Some("Gráficas alimentadas por websockets.".to_string()),
            Some("Charts fed by websockets.".to_string()),
        ),
        live_url: None,
        repo_url: Some("https://github.com/anatorres/dashboard".to_string()),
        image_url: public_url(&format!("projects/{id}.webp")),
        is_featured: false,
        display_order: 0,
        created_at: Utc::now(),
    }
}

pub fn sample_certificate() -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        title: Bilingual::new(
            Some("Administrador de Kubernetes".to_string()),
            Some("Kubernetes Administrator".to_string()),
        ),
        issuer: "CNCF".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        credential_url: Some("https://credly.com/badges/cka".to_string()),
        image_url: None,
        category: Some("Cloud".to_string()),
        display_order: 0,
    }
}

pub fn sample_experience(company: &str, start_date: NaiveDate) -> ExperienceLog {
    ExperienceLog {
        id: Uuid::new_v4(),
        company_name: company.to_string(),
        role: Bilingual::new(
            Some("Desarrolladora Backend".to_string()),
            Some("Backend Developer".to_string()),
        ),
        description: Bilingual::new(
            Some("APIs y colas de trabajo.".to_string()),
            Some("APIs and job queues.".to_string()),
        ),
        start_date,
    }
}

pub fn png_upload(name: &str) -> FileUpload {
    FileUpload::new(name, "image/png", vec![0x89, b'P', b'N', b'G', 1, 2, 3])
}

pub fn pdf_upload(name: &str) -> FileUpload {
    FileUpload::new(name, "application/pdf", b"%PDF-1.7 test".to_vec())
}

// ============================================================================
// Record store
// ============================================================================

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreCall {
    ListTechs,
    UpsertTech,
    DeleteTech,
    FindProject,
    UpsertProject,
    DeleteProject,
    ClearLinks,
    InsertLinks,
    ListProjects,
    ListCertificates,
    FindCertificate,
    UpsertCertificate,
    DeleteCertificate,
    ListExperience,
}

#[derive(Default)]
struct Records {
    techs: Vec<TechStack>,
    projects: Vec<Project>,
    links: Vec<(Uuid, Uuid)>,
    certificates: Vec<Certificate>,
    experience: Vec<ExperienceLog>,
    failures: HashMap<StoreCall, String>,
}

impl Records {
    fn check(&self, call: StoreCall) -> Result<(), String> {
        match self.failures.get(&call) {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

/// Every table behind one lock, like a single database.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    inner: Arc<Mutex<Records>>,
}

impl InMemoryRecordStore {
    fn lock(&self) -> MutexGuard<'_, Records> {
        self.inner.lock().unwrap()
    }

    pub fn fail_on(&self, call: StoreCall, message: &str) {
        self.lock().failures.insert(call, message.to_string());
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    pub fn seed_tech(&self, name: &str, category: TechCategory) -> TechStack {
        let tech = TechStack {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            icon_slug: name.to_ascii_lowercase(),
        };
        self.lock().techs.push(tech.clone());
        tech
    }

    pub fn seed_project(&self, project: Project) -> Project {
        self.lock().projects.push(project.clone());
        project
    }

    pub fn seed_certificate(&self, certificate: Certificate) -> Certificate {
        self.lock().certificates.push(certificate.clone());
        certificate
    }

    pub fn seed_experience(&self, entry: ExperienceLog) -> ExperienceLog {
        self.lock().experience.push(entry.clone());
        entry
    }

    pub fn link(&self, project_id: Uuid, tech_id: Uuid) {
        self.lock().links.push((project_id, tech_id));
    }

    /// Linked technology ids in insertion order.
    pub fn links_of(&self, project_id: Uuid) -> Vec<Uuid> {
        self.lock()
            .links
            .iter()
            .filter(|(p, _)| *p == project_id)
            .map(|(_, t)| *t)
            .collect()
    }

    /// Names in catalog order.
    pub fn tech_names(&self) -> Vec<String> {
        sorted_techs(&self.lock().techs)
            .into_iter()
            .map(|t| t.name)
            .collect()
    }

    pub fn project(&self, id: Uuid) -> Option<Project> {
        self.lock().projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn project_count(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn certificate(&self, id: Uuid) -> Option<Certificate> {
        self.lock().certificates.iter().find(|c| c.id == id).cloned()
    }
}

fn sorted_techs(techs: &[TechStack]) -> Vec<TechStack> {
    let mut sorted = techs.to_vec();
    sorted.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    sorted
}

#[async_trait]
impl TechStackRepository for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<TechStack>, TechStackRepositoryError> {
        let records = self.lock();
        records
            .check(StoreCall::ListTechs)
            .map_err(TechStackRepositoryError::DatabaseError)?;
        Ok(sorted_techs(&records.techs))
    }

    async fn upsert(&self, record: TechRecord) -> Result<TechStack, TechStackRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::UpsertTech)
            .map_err(TechStackRepositoryError::DatabaseError)?;

        let tech = TechStack {
            id: record.id,
            name: record.name,
            category: record.category,
            icon_slug: record.icon_slug,
        };
        match records.techs.iter().position(|t| t.id == tech.id) {
            Some(i) => records.techs[i] = tech.clone(),
            None => records.techs.push(tech.clone()),
        }
        Ok(tech)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechStackRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::DeleteTech)
            .map_err(TechStackRepositoryError::DatabaseError)?;

        if records.links.iter().any(|(_, t)| *t == id) {
            return Err(TechStackRepositoryError::StillReferenced);
        }
        let before = records.techs.len();
        records.techs.retain(|t| t.id != id);
        if records.techs.len() == before {
            return Err(TechStackRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRecordStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, ProjectRepositoryError> {
        let records = self.lock();
        records
            .check(StoreCall::FindProject)
            .map_err(ProjectRepositoryError::DatabaseError)?;
        Ok(records.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn upsert(&self, record: ProjectRecord) -> Result<Project, ProjectRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::UpsertProject)
            .map_err(ProjectRepositoryError::DatabaseError)?;

        let existing = records.projects.iter().position(|p| p.id == record.id);
        let created_at = existing
            .map(|i| records.projects[i].created_at)
            .unwrap_or_else(Utc::now);
        let project = Project {
            id: record.id,
            title: record.title,
            description: record.description,
            content: record.content,
            live_url: record.live_url,
            repo_url: record.repo_url,
            image_url: record.image_url,
            is_featured: record.is_featured,
            display_order: record.display_order,
            created_at,
        };
        match existing {
            Some(i) => records.projects[i] = project.clone(),
            None => records.projects.push(project.clone()),
        }
        Ok(project)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::DeleteProject)
            .map_err(ProjectRepositoryError::DatabaseError)?;

        if records.links.iter().any(|(p, _)| *p == id) {
            return Err(ProjectRepositoryError::DatabaseError(
                "update or delete on table \"projects\" violates foreign key constraint".to_string(),
            ));
        }
        let before = records.projects.len();
        records.projects.retain(|p| p.id != id);
        if records.projects.len() == before {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectTechRepository for InMemoryRecordStore {
    async fn clear_for_project(&self, project_id: Uuid) -> Result<u64, ProjectTechRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::ClearLinks)
            .map_err(ProjectTechRepositoryError::DatabaseError)?;

        let before = records.links.len();
        records.links.retain(|(p, _)| *p != project_id);
        Ok((before - records.links.len()) as u64)
    }

    async fn insert_links(
        &self,
        project_id: Uuid,
        tech_ids: &[Uuid],
    ) -> Result<(), ProjectTechRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::InsertLinks)
            .map_err(ProjectTechRepositoryError::DatabaseError)?;

        let known: HashSet<Uuid> = records.techs.iter().map(|t| t.id).collect();
        if let Some(missing) = tech_ids.iter().find(|id| !known.contains(id)) {
            return Err(ProjectTechRepositoryError::DatabaseError(format!(
                "insert on table \"project_techs\" violates foreign key constraint: tech {missing}"
            )));
        }
        for tech_id in tech_ids {
            if !records.links.contains(&(project_id, *tech_id)) {
                records.links.push((project_id, *tech_id));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryRecordStore {
    async fn list_with_techs(&self) -> Result<Vec<ProjectWithTechs>, ProjectQueryError> {
        let records = self.lock();
        records
            .check(StoreCall::ListProjects)
            .map_err(ProjectQueryError::DatabaseError)?;

        let mut projects = records.projects.clone();
        projects.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });

        Ok(projects
            .into_iter()
            .map(|project| {
                let mut techs: Vec<LinkedTech> = records
                    .links
                    .iter()
                    .filter(|(p, _)| *p == project.id)
                    .filter_map(|(_, t)| records.techs.iter().find(|tech| tech.id == *t))
                    .map(|tech| LinkedTech {
                        id: tech.id,
                        name: tech.name.clone(),
                    })
                    .collect();
                techs.sort_by(|a, b| a.name.cmp(&b.name));
                ProjectWithTechs { project, techs }
            })
            .collect())
    }
}

#[async_trait]
impl CertificateRepository for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<Certificate>, CertificateRepositoryError> {
        let records = self.lock();
        records
            .check(StoreCall::ListCertificates)
            .map_err(CertificateRepositoryError::DatabaseError)?;

        let mut certificates = records.certificates.clone();
        certificates.sort_by(|a, b| {
            b.issue_date
                .cmp(&a.issue_date)
                .then_with(|| a.display_order.cmp(&b.display_order))
        });
        Ok(certificates)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Certificate>, CertificateRepositoryError> {
        let records = self.lock();
        records
            .check(StoreCall::FindCertificate)
            .map_err(CertificateRepositoryError::DatabaseError)?;
        Ok(records.certificates.iter().find(|c| c.id == id).cloned())
    }

    async fn upsert(
        &self,
        record: CertificateRecord,
    ) -> Result<Certificate, CertificateRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::UpsertCertificate)
            .map_err(CertificateRepositoryError::DatabaseError)?;

        let certificate = Certificate {
            id: record.id,
            title: record.title,
            issuer: record.issuer,
            issue_date: record.issue_date,
            credential_url: record.credential_url,
            image_url: record.image_url,
            category: record.category,
            display_order: record.display_order,
        };
        match records.certificates.iter().position(|c| c.id == certificate.id) {
            Some(i) => records.certificates[i] = certificate.clone(),
            None => records.certificates.push(certificate.clone()),
        }
        Ok(certificate)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let mut records = self.lock();
        records
            .check(StoreCall::DeleteCertificate)
            .map_err(CertificateRepositoryError::DatabaseError)?;

        let before = records.certificates.len();
        records.certificates.retain(|c| c.id != id);
        if records.certificates.len() == before {
            return Err(CertificateRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<ExperienceLog>, ExperienceQueryError> {
        let records = self.lock();
        records
            .check(StoreCall::ListExperience)
            .map_err(ExperienceQueryError::DatabaseError)?;

        let mut entries = records.experience.clone();
        entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(entries)
    }
}

// ============================================================================
// Profile singleton
// ============================================================================

#[derive(Default)]
struct ProfileRow {
    profile: Option<Profile>,
    fail_all: Option<String>,
    fail_updates: Option<String>,
}

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    inner: Arc<Mutex<ProfileRow>>,
}

impl InMemoryProfileRepository {
    pub fn with_profile(profile: Profile) -> Self {
        let repo = Self::default();
        repo.inner.lock().unwrap().profile = Some(profile);
        repo
    }

    /// The migration that inserts the row never ran.
    pub fn unseeded() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_all = Some(message.to_string());
    }

    pub fn fail_updates_with(&self, message: &str) {
        self.inner.lock().unwrap().fail_updates = Some(message.to_string());
    }

    pub fn row_count(&self) -> usize {
        usize::from(self.inner.lock().unwrap().profile.is_some())
    }

    pub fn current(&self) -> Option<Profile> {
        self.inner.lock().unwrap().profile.clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_singleton(&self) -> Result<Profile, ProfileRepositoryError> {
        let row = self.inner.lock().unwrap();
        if let Some(msg) = &row.fail_all {
            return Err(ProfileRepositoryError::DatabaseError(msg.clone()));
        }
        row.profile.clone().ok_or(ProfileRepositoryError::NotSeeded)
    }

    async fn update_singleton(
        &self,
        change: ProfileChange,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.inner.lock().unwrap();
        if let Some(msg) = row.fail_all.as_ref().or(row.fail_updates.as_ref()) {
            return Err(ProfileRepositoryError::DatabaseError(msg.clone()));
        }
        let profile = row
            .profile
            .as_mut()
            .ok_or(ProfileRepositoryError::NotSeeded)?;

        match change {
            ProfileChange::Details(details) => {
                profile.full_name = details.full_name;
                profile.role_title = details.role_title;
                profile.about_me = details.about_me;
                profile.contact_email = Some(details.contact_email);
                profile.github_url = details.github_url;
                profile.linkedin_url = details.linkedin_url;
                profile.whatsapp_url = details.whatsapp_url;
            }
            ProfileChange::AvatarUrl(url) => profile.avatar_url = Some(url),
            ProfileChange::CvPdfUrl(url) => profile.cv_pdf_url = Some(url),
        }
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }
}

// ============================================================================
// Object storage
// ============================================================================

#[derive(Default)]
struct Objects {
    /// Public URL -> content type
    stored: HashMap<String, String>,
    fail_uploads: bool,
    fail_deletes: bool,
}

/// Single-bucket object storage with the hosted backend's URL layout.
#[derive(Clone, Default)]
pub struct InMemoryAssetStore {
    inner: Arc<Mutex<Objects>>,
}

impl InMemoryAssetStore {
    /// Places an object at `path` and returns its public URL.
    pub fn seed(&self, path: &str) -> String {
        let url = public_url(path);
        self.inner
            .lock()
            .unwrap()
            .stored
            .insert(url.clone(), "image/webp".to_string());
        url
    }

    pub fn contains_url(&self, url: &str) -> bool {
        self.inner.lock().unwrap().stored.contains_key(url)
    }

    pub fn object_count(&self) -> usize {
        self.inner.lock().unwrap().stored.len()
    }

    pub fn content_type_of(&self, url: &str) -> Option<String> {
        self.inner.lock().unwrap().stored.get(url).cloned()
    }

    pub fn fail_uploads(&self) {
        self.inner.lock().unwrap().fail_uploads = true;
    }

    pub fn fail_deletes(&self) {
        self.inner.lock().unwrap().fail_deletes = true;
    }

    /// Lifecycle over this store that skips image compression.
    pub fn lifecycle(&self) -> AssetLifecycle {
        AssetLifecycle::new(
            Arc::new(self.clone()),
            Arc::new(PassthroughCompressor),
            StorageConfig::DEFAULT_BUCKET,
        )
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn upload(
        &self,
        bucket: &str,
        path: &AssetPath,
        _bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AssetStoreError> {
        let mut objects = self.inner.lock().unwrap();
        if objects.fail_uploads {
            return Err(AssetStoreError::Rejected {
                status: 413,
                message: "Payload too large".to_string(),
            });
        }
        let url = self.public_url(bucket, path);
        objects.stored.insert(url.clone(), content_type.to_string());
        Ok(url)
    }

    async fn delete(&self, bucket: &str, path: &AssetPath) -> Result<(), AssetStoreError> {
        let mut objects = self.inner.lock().unwrap();
        if objects.fail_deletes {
            return Err(AssetStoreError::Unavailable("connection reset".to_string()));
        }
        objects.stored.remove(&self.public_url(bucket, path));
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &AssetPath) -> String {
        format!("{STORAGE_BASE}/storage/v1/object/public/{bucket}/{path}")
    }
}
