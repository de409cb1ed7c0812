use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::shared::workflow::{EditorError, GuardedSaveError};

use super::ApiResponse;

/// HTTP rendering of a failed editor save or delete.
///
/// `not_found_code` names the entity, e.g. `PROJECT_NOT_FOUND`.
pub fn editor_error_response(err: EditorError, not_found_code: &str) -> HttpResponse {
    match err {
        EditorError::Invalid(fields) => ApiResponse::validation_failed(fields),
        EditorError::NotFound(entity) => {
            ApiResponse::not_found(not_found_code, &format!("{entity} not found"))
        }
        EditorError::UploadRejected(reason) => ApiResponse::bad_request("INVALID_FILE", &reason),
        EditorError::UploadFailed(reason) => {
            error!(reason = %reason, "Asset upload failed; record left untouched");
            ApiResponse::bad_gateway("ASSET_UPLOAD_FAILED", &reason)
        }
        EditorError::RecordStore { step, message } => {
            error!(step = %step, message = %message, "Record store failure");
            ApiResponse::record_store_error(step, &message)
        }
        EditorError::StillReferenced => ApiResponse::conflict(
            "TECH_IN_USE",
            "This technology is still used by one or more projects",
        ),
    }
}

pub fn guarded_save_response(err: GuardedSaveError) -> HttpResponse {
    match err {
        GuardedSaveError::Busy(busy) => {
            warn!(kind = %busy.kind, "Save refused: already in progress");
            ApiResponse::conflict("SAVE_IN_PROGRESS", &busy.to_string())
        }
        GuardedSaveError::Detached(e) => {
            error!(error = %e, "Editor task aborted");
            ApiResponse::internal_error()
        }
    }
}
