mod latency;
mod metrics;

// Publicly expose the Metrics abstraction
pub use metrics::{InFlightGuard, Metrics, MetricsKind, MetricsPtr};

// Simulated workload bounds for the monitored service
pub use latency::LatencyRange;
