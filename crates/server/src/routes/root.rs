use axum::http::StatusCode;

/// Identifies the service
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Student enrollment API")
}
