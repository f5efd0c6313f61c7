use crate::{dtos::admissions::AdmissionsResponse, state::AppState};
use axum::{Json, extract::State};

/// Reports whether enrollment is open and, if not, when it reopens
#[utoipa::path(
    get,
    path = "/api/admissions",
    responses(
        (status = 200, description = "Current admissions window", body = AdmissionsResponse)
    ),
    tag = "Students"
)]
pub async fn get_admissions(State(state): State<AppState>) -> Json<AdmissionsResponse> {
    Json(AdmissionsResponse {
        open: state.admissions.open,
        reopen_date: state.admissions.reopen_date,
    })
}
