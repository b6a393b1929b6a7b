//! Request-level error taxonomy.
//!
//! Business failures (validation, not found, store errors) are answered with
//! HTTP 200 and `success: false`; existing clients inspect the envelope, not
//! the status line. Only an undecodable body is a 4xx.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::response::ApiResponse;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::OK,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Store(e) => tracing::warn!(error = %e, "Store operation failed"),
            ServiceError::InvalidBody(e) => tracing::debug!(error = %e, "Rejected request body"),
            _ => {}
        }
        (self.status(), ApiResponse::failure(self.to_string())).into_response()
    }
}
