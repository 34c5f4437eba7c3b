//! Main web app module containing web routings to access API etc.

use crate::api_docs::ApiDoc;
use crate::errors::{ApiError, ErrorResponse};
use crate::request_id::RequestId;
use crate::tracker::FlightTracker;
use actix_web::{get, post, web, HttpMessage, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Tickets to track, each one a `[source, destination]` pair of IATA codes
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct TrackQuery {
    #[schema(example = json!([["IND", "EWR"], ["SFO", "ATL"], ["GSO", "IND"], ["ATL", "GSO"]]))]
    pub tickets: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is up", body = HealthStatus),
    )
)]
#[get("/")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "up".to_string(),
    })
}

/// Endpoint finding the overall source and destination of a set of tickets
#[utoipa::path(
    post,
    path = "/track",
    tag = "tracker",
    request_body = TrackQuery,
    responses(
        (status = 200, description = "Source and destination, in that order", body = [String], example = json!(["SFO", "EWR"])),
        (status = 400, description = "Bad request body or invalid ticket", body = ErrorResponse),
        (status = 422, description = "Tickets don't form a single path", body = ErrorResponse),
    )
)]
#[post("/track")]
pub async fn track(
    tracker: web::Data<FlightTracker>,
    request_id: RequestId,
    json: web::Json<TrackQuery>,
) -> Result<HttpResponse, ApiError> {
    let legs = tracker.validate_tickets(&request_id, &json.tickets)?;
    let itinerary = tracker.find_source_and_destination(&request_id, &legs)?;

    tracing::info!(request_id = %request_id, "FindSourceAndDestination call completed");
    Ok(HttpResponse::Ok().json(itinerary))
}

#[get("/api-docs/openapi.json")]
pub async fn openapi() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Every bind failure on `/track` is answered as a bad request. The body is decoded as JSON
/// whatever Content-Type the client sent.
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(|err, req| {
            let request_id = req
                .extensions()
                .get::<RequestId>()
                .map(|id| id.to_string())
                .unwrap_or_default();
            tracing::error!(request_id = %request_id, "ShouldBindJSON - {}", err);
            ApiError::BadRequest.into()
        })
}

/// Registers the routes. The caller provides the `FlightTracker` app data.
pub fn configure(cfg: &mut web::ServiceConfig, json_limit: usize) {
    cfg.app_data(json_config(json_limit))
        .service(health)
        .service(track)
        .service(openapi);
}
