//! API error handling
//!
//! Every failure is answered with `{ "message": ..., "code": ... }`, where
//! `code` repeats the HTTP status.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::CoreError;
use domain_period::PeriodError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// The request body could not be read as JSON
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError::NotFound("Not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Period(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
            code: status.as_u16(),
        };

        if status.is_server_error() {
            error!(code = body.code, error = %body.message, "Request failed");
        } else {
            warn!(code = body.code, error = %body.message, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Errors raised while building the application state
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load locale data: {0}")]
    Locale(#[from] CoreError),

    #[error("Invalid embedded document {name}: {source}")]
    Document {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
