// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{routing::get, Router};

use handlers::{home_handler, metrics_handler, todo_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod telemetry;

pub use config::*;
pub use telemetry::{init_tracing, shutdown_signal};

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_metrics, // ---
    create_noop_metrics,
    create_prom_metrics,
};

/// Build the router for the static todo service.
///
/// The service has no state; it answers `GET /todo` and nothing else.
pub fn create_todo_router() -> Router {
    // ---
    Router::new().route("/todo", get(todo_handler))
}

/// Build the router for the monitored service using the metrics backend
/// selected in `config`.
pub fn create_monitored_router(config: &MonitoredConfig) -> Result<Router> {
    // ---
    let metrics = create_metrics(config.metrics_type)?;
    Ok(create_monitored_router_with_metrics(config, metrics))
}

/// Build the router for the monitored service around an existing metrics handle.
///
/// Callers that need to inspect the instruments directly (tests, embedders)
/// keep their own clone of `metrics`.
pub fn create_monitored_router_with_metrics(
    config: &MonitoredConfig,
    metrics: domain::MetricsPtr,
) -> Router {
    // ---
    let app_state = AppState::new(metrics, config.latency);

    Router::new()
        .route("/", get(home_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}
