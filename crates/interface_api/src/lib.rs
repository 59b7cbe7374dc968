//! HTTP API Layer
//!
//! This crate exposes the period generator as a synchronizer data source
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Descriptor, synchronizer and health endpoints
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: `{ message, code }` error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(config, Arc::new(SystemClock))?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod documents;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::{Clock, LocaleCatalog};
use domain_period::{FilterDefaults, PeriodGenerator};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::documents::StaticDocuments;
use crate::error::StartupError;
use crate::handlers::{health, meta, synchronizer};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
///
/// Everything in here is immutable reference data built once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: Arc<PeriodGenerator>,
    pub catalog: Arc<LocaleCatalog>,
    pub documents: Arc<StaticDocuments>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the shared state from configuration
    ///
    /// # Errors
    ///
    /// Returns `StartupError` if the embedded locale resources or JSON
    /// documents fail to parse.
    pub fn new(config: ApiConfig, clock: Arc<dyn Clock>) -> Result<Self, StartupError> {
        let catalog = Arc::new(LocaleCatalog::load()?);
        let documents = Arc::new(StaticDocuments::load()?);
        let generator = PeriodGenerator::new(Arc::clone(&catalog), clock).with_defaults(
            FilterDefaults {
                timezone: config.default_timezone.clone(),
                locale: config.default_locale.clone(),
            },
        );

        Ok(Self {
            generator: Arc::new(generator),
            catalog,
            documents,
            config,
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Descriptor routes used when the consumer registers the source
    let meta_routes = Router::new()
        .route("/", get(meta::app_descriptor))
        .route("/validate", post(meta::validate))
        .route("/health", get(health::health_check));

    // Synchronizer protocol routes
    let synchronizer_routes = Router::new()
        .route("/config", post(synchronizer::sync_config))
        .route("/schema", post(synchronizer::schema))
        .route("/datalist", post(synchronizer::datalist))
        .route("/data", post(synchronizer::data));

    Router::new()
        .merge(meta_routes)
        .nest("/api/v1/synchronizer", synchronizer_routes)
        .fallback(meta::not_found)
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
