use crate::{
    dtos::student::{CreatedResponse, ErrorResponse, MessageResponse},
    error::ApiError,
    state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use database::services::student::{Registration, StudentService};
use log::info;
use models::applicant::Applicant;

/// Register a new student
///
/// The payload is stored as submitted; field rules are enforced by the form.
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = Applicant,
    responses(
        (status = 201, description = "Student registered", body = CreatedResponse),
        (status = 403, description = "Admissions are closed", body = MessageResponse),
        (status = 409, description = "A student with this email is already registered", body = MessageResponse),
        (status = 500, description = "Malformed payload or storage failure", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Applicant>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    if !state.admissions.open {
        return Err(ApiError::AdmissionsClosed);
    }

    let Json(applicant) = payload?;
    info!("Received registration for {}", applicant.email);

    match StudentService::register(&state.db, applicant).await? {
        Registration::Created(record) => Ok((
            StatusCode::CREATED,
            Json(CreatedResponse {
                success: true,
                data: record,
            }),
        )),
        Registration::AlreadyRegistered => Err(ApiError::AlreadyRegistered),
    }
}
