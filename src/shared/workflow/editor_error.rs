use thiserror::Error;

use crate::shared::validation::FieldError;

use super::SaveStep;

/// Failure of an editor save or delete, classified for the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("One or more fields are invalid")]
    Invalid(Vec<FieldError>),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Upload rejected: {0}")]
    UploadRejected(String),

    #[error("Asset upload failed: {0}")]
    UploadFailed(String),

    #[error("{step} failed: {message}")]
    RecordStore { step: SaveStep, message: String },

    #[error("Still used by one or more projects")]
    StillReferenced,
}

impl EditorError {
    pub fn store(step: SaveStep, message: impl Into<String>) -> Self {
        EditorError::RecordStore {
            step,
            message: message.into(),
        }
    }

    pub fn step(&self) -> Option<SaveStep> {
        match self {
            EditorError::RecordStore { step, .. } => Some(*step),
            EditorError::UploadRejected(_) | EditorError::UploadFailed(_) => {
                Some(SaveStep::ResolveImage)
            }
            _ => None,
        }
    }
}
