pub mod noop;
pub mod prometheus;

use crate::domain::{MetricsKind, MetricsPtr};

// Re-export the factory functions for easy access
pub use self::noop::create as create_noop_metrics;
pub use self::prometheus::create as create_prom_metrics;

/// Builds the metrics backend named by `kind`.
pub fn create(kind: MetricsKind) -> anyhow::Result<MetricsPtr> {
    // ---
    match kind {
        MetricsKind::Prom => create_prom_metrics(),
        MetricsKind::Noop => {
            tracing::info!("Metrics disabled, using no-op backend");
            create_noop_metrics()
        }
    }
}
