//! Resource handlers.
//!
//! Each handler takes the store, the identifiers the router extracted and
//! the raw body, and returns an envelope response. Handlers never see the
//! path itself.

pub mod comparison;
pub mod materials;
pub mod vendors;

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ServiceError, ServiceResult};
use crate::http::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub language: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Identity and liveness probe for `GET /`.
pub fn service_info() -> Response {
    ApiResponse::ok(ServiceInfo {
        service: "Vendor Service",
        language: "Rust",
        version: env!("CARGO_PKG_VERSION"),
        status: "Active",
    })
    .into_response()
}

/// Decode a JSON request body. Missing fields take their defaults; an empty
/// or malformed body is rejected.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> ServiceResult<T> {
    serde_json::from_slice(body).map_err(ServiceError::InvalidBody)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Vendor;

    #[test]
    fn test_empty_body_is_invalid() {
        let err = parse_body::<Vendor>(&Bytes::new()).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidBody(_)));
    }

    #[test]
    fn test_wrong_field_type_is_invalid() {
        let body = Bytes::from_static(br#"{"name":"A","rating":"five"}"#);
        assert!(parse_body::<Vendor>(&body).is_err());
    }
}
