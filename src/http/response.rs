//! Error responses.
//!
//! # Responsibilities
//! - Define the errors a handler may return
//! - Map every unhandled error to a generic 500 response
//!
//! # Design Decisions
//! - No error detail leaks into the response body
//! - Panics are mapped to the same response by `CatchPanicLayer` in server.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned for every unhandled failure.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Errors raised while handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// A downstream service was unreachable, returned non-2xx, or sent an
    /// unexpected body.
    #[error("{service} service request failed: {source}")]
    Downstream {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Raised on purpose to exercise the default error path.
    #[error("{0}")]
    Deliberate(String),
}

impl AppError {
    pub fn downstream(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| AppError::Downstream { service, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled error while serving request");
        internal_error()
    }
}

/// The generic 500 response.
pub fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
}
