use crate::domain::Metrics;
use std::time::Duration;

/// No-op metrics implementation.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn request_started(&self) {}
    fn request_finished(&self) {}
    fn record_http_request(&self, _: Duration, _: &str, _: &str, _: u16) {}
}
