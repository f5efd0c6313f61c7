use models::applicant::StudentRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a `201 Created` registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub data: StudentRecord,
}

/// Body of a rejected registration the applicant can act on
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Body of an unexpected failure; the cause is only logged
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
