//! HTTP API for checking vaccination status by national ID or passport number.
//!
//! Exposes `GET /id/{id}` backed by a JSON dataset that is re-read on every
//! request, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use registry::{JsonFileDataset, VaccinationDataset};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::vaccination::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<D: VaccinationDataset + 'static>(
    state: Arc<AppState<D>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/id", get(routes::vaccination::missing::<D>))
        .route("/id/", get(routes::vaccination::missing::<D>))
        .route("/id/{id}", get(routes::vaccination::get::<D>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state backed by the configured dataset file.
pub fn create_default_state(config: &Config) -> Arc<AppState<JsonFileDataset>> {
    Arc::new(AppState::new(
        JsonFileDataset::new(config.dataset_path.clone()),
        config.validation_policy,
    ))
}
