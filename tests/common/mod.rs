// Test helpers are intentionally partially used
#![allow(dead_code)]

use axum::Router;
use greeting_services::domain::LatencyRange;
use greeting_services::MonitoredConfig;
use reqwest::Client;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

// ============================================================================
// Test Setup
// ============================================================================

/// Monitored service config with a short latency range so tests stay quick.
pub fn fast_monitored_config() -> MonitoredConfig {
    // ---
    MonitoredConfig {
        latency: LatencyRange::from_secs_f64(0.001, 0.005).unwrap(),
        ..MonitoredConfig::default()
    }
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new(app: Router) -> Self {
        // --

        // Enable debug logging only when requested
        if std::env::var("TEST_DEBUG").is_ok() {
            greeting_services::init_tracing();
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }

    pub async fn scrape(&self) -> String {
        // ---
        self.client
            .get(self.url("/metrics"))
            .send()
            .await
            .expect("Failed to scrape metrics")
            .text()
            .await
            .expect("Failed to read metrics body")
    }
}

// ============================================================================
// Exposition parsing
// ============================================================================

/// Finds the sample for `name` whose label set is exactly `labels`.
pub fn metric_value(body: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    // ---
    body.lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let (series, value) = line.rsplit_once(' ')?;
            let (metric, label_text) = match series.split_once('{') {
                Some((metric, rest)) => (metric, rest.trim_end_matches('}')),
                None => (series, ""),
            };
            if metric != name {
                return None;
            }

            let pairs: Vec<&str> = label_text.split(',').filter(|p| !p.is_empty()).collect();
            let all_match = labels
                .iter()
                .all(|(k, v)| pairs.contains(&format!("{k}=\"{v}\"").as_str()));

            if all_match && pairs.len() == labels.len() {
                value.parse().ok()
            } else {
                None
            }
        })
}

pub const ROOT_SERIES: &[(&str, &str)] = &[("method", "GET"), ("endpoint", "/"), ("http_status", "200")];

pub fn root_requests_total(body: &str) -> f64 {
    // ---
    metric_value(body, "http_requests_total", ROOT_SERIES).unwrap_or(0.0)
}

pub fn in_flight(body: &str) -> f64 {
    // ---
    metric_value(body, "http_requests_in_flight", &[]).expect("gauge should always be exported")
}

pub fn root_duration_count(body: &str) -> f64 {
    // ---
    metric_value(body, "http_request_duration_seconds_count", &[("endpoint", "/")]).unwrap_or(0.0)
}

/// Pulls the load time out of `"... Load time: 0.1234s"`.
pub fn load_time_secs(message: &str) -> f64 {
    // ---
    message
        .rsplit_once("Load time: ")
        .and_then(|(_, tail)| tail.strip_suffix('s'))
        .and_then(|secs| secs.parse().ok())
        .unwrap_or_else(|| panic!("unexpected message: {message}"))
}
