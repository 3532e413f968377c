//! Application state management.
//!
//! This module defines the shared state structure that gets passed to the
//! monitored service's Axum handlers via the `State` extractor. The state
//! holds the metrics handle and the simulated latency range.
//!
//! The state is cheaply cloneable (the metrics backend sits behind an `Arc`)
//! so it can be handed to each request without copying any instruments.

use crate::domain::{LatencyRange, MetricsPtr};

/// Shared application state passed to the monitored service handlers.
///
/// Built once in `create_monitored_router_with_metrics()` and never mutated.
/// Metric instruments mutate through their own atomics, not through this struct.
///
/// # Lifecycle
///
/// 1. Created once during router construction
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording request events.
    ///
    /// Either Prometheus-backed or no-op, depending on configuration.
    metrics: MetricsPtr,

    /// Bounds for the simulated work performed by `GET /`.
    latency: LatencyRange,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr, latency: LatencyRange) -> Self {
        // ---
        AppState { metrics, latency }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get the simulated latency range.
    pub(crate) fn latency(&self) -> LatencyRange {
        // ---
        self.latency
    }
}
