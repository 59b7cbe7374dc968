//! Source descriptor handlers

use axum::{extract::State, Json};
use serde_json::Value;

use crate::dto::synchronizer::ValidateResponse;
use crate::error::ApiError;
use crate::AppState;

/// Application descriptor
pub async fn app_descriptor(State(state): State<AppState>) -> Json<Value> {
    Json(state.documents.app.clone())
}

/// Account validation
///
/// The source is public, so every account is valid.
pub async fn validate() -> Json<ValidateResponse> {
    Json(ValidateResponse {
        name: "Public".to_string(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
