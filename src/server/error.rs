// src/server/error.rs
//! HTTP error responses
//!
//! Every failure is returned as an RFC 7807 problem details body so
//! clients see one error shape across all endpoints.

use crate::error::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Error response format (RFC 7807)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Error type URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable title
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Detailed description
    pub detail: String,
}

impl ProblemDetails {
    pub fn new(error_type: &str, title: &str, status: u16, detail: &str) -> Self {
        Self {
            error_type: format!("urn:recipe-api:error:{}", error_type),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
        }
    }

    pub fn not_found(detail: &str) -> Self {
        Self::new("not_found", "Not Found", 404, detail)
    }

    pub fn validation(detail: &str) -> Self {
        Self::new("validation", "Unprocessable Entity", 422, detail)
    }

    pub fn bad_request(detail: &str) -> Self {
        Self::new("bad_request", "Bad Request", 400, detail)
    }

    pub fn internal(detail: &str) -> Self {
        Self::new("internal", "Internal Error", 500, detail)
    }
}

impl From<&Error> for ProblemDetails {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotFound(_) => ProblemDetails::not_found(&err.to_string()),
            Error::Validation(msg) => ProblemDetails::validation(msg),
            Error::MalformedBody(msg) => ProblemDetails::bad_request(msg),
            // Seed problems stop the server at startup; reaching a handler is a bug
            Error::InvalidSeed(msg) => ProblemDetails::internal(msg),
            Error::IdsExhausted(_) => ProblemDetails::internal(&err.to_string()),
        }
    }
}

/// Error wrapper returned by handlers
#[derive(Debug)]
pub struct ApiError(pub ProblemDetails);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(ProblemDetails::from(&err))
    }
}

impl From<ProblemDetails> for ApiError {
    fn from(problem: ProblemDetails) -> Self {
        ApiError(problem)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [("content-type", "application/problem+json")],
            Json(&self.0),
        )
            .into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
