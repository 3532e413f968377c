//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait on
//! top of the `prometheus` crate. Every instance owns its own `Registry`, so
//! several services (or several tests) can run side by side in one process
//! without fighting over a global recorder.

use crate::domain::Metrics;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Prometheus-based metrics implementation.
pub struct PrometheusMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    requests_in_flight: IntGauge,
    request_duration: HistogramVec,
}

impl PrometheusMetrics {
    /// Registers the three request instruments with a fresh registry.
    ///
    /// # Errors
    /// Returns an error if an instrument cannot be built or registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        // ---
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP Requests"),
            &["method", "endpoint", "http_status"],
        )?;

        let requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Current number of requests being processed",
        )?;

        // Default buckets: 5ms .. 10s
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Request latency distribution",
            ),
            &["endpoint"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(requests_in_flight.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        // process_cpu_seconds_total, process_resident_memory_bytes, ...
        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        Ok(PrometheusMetrics {
            registry,
            requests_total,
            requests_in_flight,
            request_duration,
        })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        // ---
        let families = self.registry.gather();
        let mut buffer = Vec::new();

        if let Err(err) = TextEncoder::new().encode(&families, &mut buffer) {
            tracing::error!("Failed to encode metrics: {:?}", err);
            return String::new();
        }

        // The text encoder only ever writes UTF-8
        String::from_utf8(buffer).unwrap_or_else(|err| {
            tracing::error!("Metrics output was not UTF-8: {:?}", err);
            String::new()
        })
    }

    fn request_started(&self) {
        self.requests_in_flight.inc();
    }

    fn request_finished(&self) {
        self.requests_in_flight.dec();
    }

    fn record_http_request(&self, elapsed: Duration, endpoint: &str, method: &str, status: u16) {
        // ---
        tracing::debug!(endpoint, method, status, ?elapsed, "Recording HTTP request");
        let status = status.to_string();

        self.requests_total
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[endpoint])
            .observe(elapsed.as_secs_f64());
    }
}
