//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Registry failures keep their stable numeric code in the body as
//! `registry_code`, next to the machine-readable name:
//!
//! ```json
//! {"error": {"code": "INVALID_GPA", "registry_code": 110, "message": "gpa must be between 0 and 400"}}
//! ```
//!
//! Rejections of updates and configuration changes carry no reason: the
//! registry does not report one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use diploma_core::CoreError;
use diploma_registry::IssueError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "DIPLOMA_ALREADY_ISSUED").
    pub code: String,
    /// Numeric registry code, present only for issuance failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_code: Option<u32>,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No caller identity on the request (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The registry refused an issuance.
    #[error("{0}")]
    Issue(IssueError),

    /// The registry refused an update or configuration change (409).
    #[error("rejected: {0}")]
    Rejected(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::Issue(err) => (issue_status(err), err.name()),
            Self::Rejected(_) => (StatusCode::CONFLICT, "REJECTED"),
        }
    }
}

fn issue_status(err: &IssueError) -> StatusCode {
    match err {
        IssueError::NotAuthorized => StatusCode::FORBIDDEN,
        IssueError::AlreadyIssued => StatusCode::CONFLICT,
        IssueError::AuthorityNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        IssueError::MaxDiplomasExceeded => StatusCode::INSUFFICIENT_STORAGE,
        IssueError::FeeTransferFailed => StatusCode::BAD_GATEWAY,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = self.to_string();

        let registry_code = match &self {
            Self::Issue(err) => Some(err.code()),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                registry_code,
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        Self::Issue(err)
    }
}

/// Malformed identifiers, hashes and enum strings in a request are client errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::BadRequest(err.to_string())
    }
}
