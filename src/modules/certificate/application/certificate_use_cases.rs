use std::sync::Arc;

use crate::modules::certificate::application::ports::incoming::use_cases::{
    DeleteCertificateUseCase, ListCertificatesUseCase, SaveCertificateUseCase,
};

#[derive(Clone)]
pub struct CertificateUseCases {
    pub list: Arc<dyn ListCertificatesUseCase + Send + Sync>,
    pub save: Arc<dyn SaveCertificateUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCertificateUseCase + Send + Sync>,
}
