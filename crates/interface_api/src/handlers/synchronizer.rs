//! Synchronizer handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono_tz::TZ_VARIANTS;
use core_kernel::Granularity;
use domain_period::SyncRequest;
use serde_json::Value;
use tracing::debug;

use crate::dto::synchronizer::{ChoiceItem, DataResponse, DatalistRequest, DatalistResponse};
use crate::error::ApiError;
use crate::AppState;

/// Synchronizer configuration: synchronized types and their filters
pub async fn sync_config(State(state): State<AppState>) -> Json<Value> {
    Json(state.documents.sync_config.clone())
}

/// Schema of the period type
pub async fn schema(State(state): State<AppState>) -> Json<Value> {
    Json(state.documents.schema.clone())
}

/// Choice lists for the filter fields
pub async fn datalist(
    State(state): State<AppState>,
    payload: Result<Json<DatalistRequest>, JsonRejection>,
) -> Result<Json<DatalistResponse>, ApiError> {
    let Json(request) = payload?;

    let items = match request.field.as_deref() {
        Some("timezone") => timezone_choices(),
        Some("locale") => state
            .catalog
            .entries()
            .map(|entry| ChoiceItem::new(entry.title(), entry.tag))
            .collect(),
        Some("types") => Granularity::ALL
            .iter()
            .map(|g| ChoiceItem::new(g.plural(), g.name()))
            .collect(),
        other => {
            debug!(field = ?other, "No datalist for field");
            Vec::new()
        }
    };

    Ok(Json(DatalistResponse { items }))
}

fn timezone_choices() -> Vec<ChoiceItem> {
    let mut items: Vec<ChoiceItem> = TZ_VARIANTS
        .iter()
        .map(|tz| ChoiceItem::new(tz.name(), tz.name()))
        .collect();
    items.sort_by(|a, b| a.title.cmp(&b.title));
    items
}

/// Period records for a filter
pub async fn data(
    State(state): State<AppState>,
    payload: Result<Json<SyncRequest>, JsonRejection>,
) -> Result<Json<DataResponse>, ApiError> {
    let Json(request) = payload?;
    let filter = request.into_period_filter()?;

    // Generation is CPU-bound and grows with the requested range
    let generator = state.generator.clone();
    let items = tokio::task::spawn_blocking(move || generator.generate(&filter))
        .await
        .map_err(|e| ApiError::Internal(format!("Task join error: {e}")))??;

    Ok(Json(DataResponse { items }))
}
