//! Request correlation ids.
//!
//! Reuses the caller's `X-Request-Id` when it sent a usable one, otherwise generates a UUID v4. The
//! id lands in the request extensions so handlers can extract it as [`RequestId`], and is echoed on
//! the response.

use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use std::{
    convert::Infallible,
    fmt,
    future::{ready, Ready},
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller supplied id we are willing to carry around.
const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn generate() -> RequestId {
        RequestId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_header(value: &HeaderValue) -> Option<RequestId> {
        let id = value.to_str().ok()?.trim();
        if id.is_empty() || id.len() > MAX_REQUEST_ID_LEN {
            return None;
        }
        Some(RequestId(id.to_string()))
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        RequestId(id.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for RequestId {
    type Error = Infallible;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Only missing when the middleware isn't mounted
        let id = req
            .extensions()
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(RequestId::generate);
        ready(Ok(id))
    }
}

/// Middleware for `actix_web::middleware::from_fn`.
pub async fn propagate(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(RequestId::from_header)
        .unwrap_or_else(RequestId::generate);

    req.extensions_mut().insert(id.clone());

    let mut res = next.call(req).await?;
    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    Ok(res)
}

#[cfg(test)]
mod request_id_tests {
    use super::*;

    #[test]
    fn test_header_values() {
        let id = RequestId::from_header(&HeaderValue::from_static(" abc-123 "));
        assert_eq!(id, Some(RequestId::from("abc-123")));

        assert_eq!(RequestId::from_header(&HeaderValue::from_static("   ")), None);

        let too_long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        assert_eq!(
            RequestId::from_header(&HeaderValue::from_str(&too_long).unwrap()),
            None
        );
    }

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = RequestId::generate();

        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, RequestId::generate());
    }
}
