mod delete_certificate_service;
mod list_certificates_service;
mod save_certificate_service;

pub use delete_certificate_service::DeleteCertificateService;
pub use list_certificates_service::ListCertificatesService;
pub use save_certificate_service::SaveCertificateService;

use crate::modules::certificate::application::ports::outgoing::CertificateRepositoryError;
use crate::shared::workflow::{EditorError, SaveStep};

fn map_certificate_error(step: SaveStep, err: CertificateRepositoryError) -> EditorError {
    match err {
        CertificateRepositoryError::NotFound => EditorError::NotFound("Certificate"),
        CertificateRepositoryError::DatabaseError(msg) => EditorError::store(step, msg),
    }
}
