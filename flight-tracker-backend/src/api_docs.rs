use crate::errors::ErrorResponse;
use crate::web_app::{HealthStatus, TrackQuery};
use utoipa::OpenApi;

/// OpenAPI document served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FLIGHT PATHS TRACKER API",
        version = "1.0",
        description = "This lists down the endpoints that are part of FLIGHT PATHS TRACKER API server."
    ),
    paths(crate::web_app::health, crate::web_app::track),
    components(schemas(TrackQuery, HealthStatus, ErrorResponse)),
    tags((name = "tracker", description = "Find source and destination"))
)]
pub struct ApiDoc;
