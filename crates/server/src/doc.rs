use utoipa::OpenApi;

/// API Documentation
///
/// Paths are collected from the router in [`crate::app::build_router`].
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Students", description = "Enrollment endpoints"),
        (name = "Health", description = "Service status endpoints"),
    ),
    info(
        title = "Student Enrollment API",
        version = "1.0.0",
        description = "Collects skill enhancement program applications",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
