mod delete_certificate;
mod list_certificates;
mod save_certificate;

pub use delete_certificate::DeleteCertificateUseCase;
pub use list_certificates::{ListCertificatesError, ListCertificatesUseCase};
pub use save_certificate::SaveCertificateUseCase;
