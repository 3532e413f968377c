use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Abstraction for application metrics (counter, gauge, histogram).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Mark a request as in flight.
    fn request_started(&self);

    /// Mark an in-flight request as finished.
    fn request_finished(&self);

    /// Record a completed HTTP request: bump the request counter for the
    /// label set and observe `elapsed` into the latency histogram.
    fn record_http_request(&self, elapsed: Duration, endpoint: &str, method: &str, status: u16);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;

/// Holds one slot of the in-flight gauge for as long as it lives.
///
/// The gauge is incremented when the guard is created and decremented when
/// it is dropped, so a request future that gets cancelled part way through
/// still gives its slot back.
pub struct InFlightGuard {
    metrics: MetricsPtr,
}

impl InFlightGuard {
    // ---
    pub fn new(metrics: &MetricsPtr) -> Self {
        // ---
        metrics.request_started();
        InFlightGuard {
            metrics: Arc::clone(metrics),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.metrics.request_finished();
    }
}

/// Which metrics backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsKind {
    /// Prometheus registry owned by the service.
    Prom,
    /// Discards every observation.
    Noop,
}

impl FromStr for MetricsKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // ---
        match s.trim().to_ascii_lowercase().as_str() {
            "prom" | "prometheus" => Ok(MetricsKind::Prom),
            "noop" | "none" => Ok(MetricsKind::Noop),
            other => Err(anyhow::anyhow!("Unknown metrics type: {other}")),
        }
    }
}
