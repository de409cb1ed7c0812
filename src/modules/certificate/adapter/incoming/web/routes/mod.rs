mod delete_certificate;
mod list_certificates;
mod save_certificate;

pub use delete_certificate::{delete_certificate_handler, __path_delete_certificate_handler};
pub use list_certificates::{list_certificates_handler, __path_list_certificates_handler};
pub use save_certificate::{create_certificate_handler, __path_create_certificate_handler, update_certificate_handler, __path_update_certificate_handler};
