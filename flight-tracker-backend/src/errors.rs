//! API errors and the JSON body they render as.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use flight_tracker_shared::tickets::TrackError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const BAD_REQUEST: &str = "ERR_API_BAD_REQUEST";
pub const INVALID_TICKET: &str = "ERR_API_INVALID_TICKET";
pub const UNABLE_TO_TRACK: &str = "ERR_API_UNABLE_TO_TRACK";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body couldn't be bound to the request type.
    #[error("Invalid request body")]
    BadRequest,
    #[error("Invalid ticket")]
    InvalidTicket,
    #[error("Unable to track source and destination for the given tickets")]
    UnableToTrack,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub error_code: String,
    pub error_message: String,
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest => BAD_REQUEST,
            ApiError::InvalidTicket => INVALID_TICKET,
            ApiError::UnableToTrack => UNABLE_TO_TRACK,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            error_code: self.error_code().to_string(),
            error_message: self.to_string(),
        }
    }
}

impl From<TrackError> for ApiError {
    fn from(err: TrackError) -> Self {
        match err {
            TrackError::InvalidTicket(_) => ApiError::InvalidTicket,
            TrackError::UnableToTrack => ApiError::UnableToTrack,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest | ApiError::InvalidTicket => StatusCode::BAD_REQUEST,
            ApiError::UnableToTrack => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response())
    }
}

#[cfg(test)]
mod errors_tests {
    use super::*;
    use flight_tracker_shared::tickets::TicketFault;

    #[test]
    fn test_error_bodies() {
        assert_eq!(
            ApiError::BadRequest.to_response(),
            ErrorResponse {
                status: 400,
                error_code: BAD_REQUEST.to_string(),
                error_message: "Invalid request body".to_string(),
            }
        );
        assert_eq!(
            ApiError::InvalidTicket.to_response(),
            ErrorResponse {
                status: 400,
                error_code: INVALID_TICKET.to_string(),
                error_message: "Invalid ticket".to_string(),
            }
        );
        assert_eq!(
            ApiError::UnableToTrack.to_response(),
            ErrorResponse {
                status: 422,
                error_code: UNABLE_TO_TRACK.to_string(),
                error_message: "Unable to track source and destination for the given tickets"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_from_track_error() {
        let err: ApiError = TrackError::InvalidTicket(TicketFault::Arity(3)).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), INVALID_TICKET);

        let err: ApiError = TrackError::UnableToTrack.into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
