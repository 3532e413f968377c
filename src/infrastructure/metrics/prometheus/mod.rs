mod prometheus_metrics;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

/// Creates a new Prometheus metrics implementation.
///
/// The returned handle owns its registry; render it from the `/metrics`
/// endpoint for scraping.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    let metrics = PrometheusMetrics::new()?;

    Ok(Arc::new(metrics))
}
