use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldError;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "ASSET_UPLOAD_FAILED")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "The image could not be uploaded")]
    pub message: String,

    /// Per-field messages, present on VALIDATION_ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,

    /// Save step that failed, present on RECORD_STORE_ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "SyncRelations")]
    pub step: Option<String>,
}
