use crate::dtos::student::{ErrorResponse, MessageResponse};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use sea_orm::DbErr;

pub const ALREADY_REGISTERED: &str = "Student is already registered";
pub const ADMISSIONS_CLOSED: &str = "Admissions are currently closed";
pub const SERVER_ERROR: &str = "Server error";

/// Everything a registration request can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("email is already registered")]
    AlreadyRegistered,
    #[error("admissions are closed")]
    AdmissionsClosed,
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] JsonRejection),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyRegistered => message(StatusCode::CONFLICT, ALREADY_REGISTERED),
            Self::AdmissionsClosed => message(StatusCode::FORBIDDEN, ADMISSIONS_CLOSED),
            // Malformed bodies and storage failures look the same to the client
            Self::MalformedPayload(ref rejection) => {
                warn!("Error in POST /api/students: {rejection}");
                server_error()
            }
            Self::Database(ref err) => {
                error!("Error in POST /api/students: {err}");
                server_error()
            }
        }
    }
}

fn message(status: StatusCode, message: &str) -> Response {
    let body = MessageResponse {
        success: false,
        message: message.to_string(),
    };
    (status, Json(body)).into_response()
}

fn server_error() -> Response {
    let body = ErrorResponse {
        success: false,
        error: SERVER_ERROR.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
