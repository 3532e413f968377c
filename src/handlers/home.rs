use crate::app_state::AppState;
use crate::domain::InFlightGuard;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

/// Body returned by `GET /` on the monitored service.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    message: String,
}

impl HomeResponse {
    fn with_load_time(secs: f64) -> Self {
        // ---
        HomeResponse {
            message: format!("Hello from the monitored application! Load time: {secs:.4}s"),
        }
    }
}

/// Handler for `GET /` on the monitored service.
///
/// Sleeps for a random duration drawn from the configured latency range to
/// stand in for real work, then reports that duration.
///
/// Side effects, in order:
/// - `http_requests_in_flight` is held up for the duration of the sleep
/// - `http_requests_total{method="GET",endpoint="/",http_status="200"}` is incremented
/// - the wall-clock time spent in the handler is observed into
///   `http_request_duration_seconds{endpoint="/"}`
#[tracing::instrument(skip(state))]
pub async fn home_handler(State(state): State<AppState>) -> Json<HomeResponse> {
    // ---
    let start = Instant::now();

    let in_flight = InFlightGuard::new(state.metrics());

    // ThreadRng is !Send, keep it out of the await below.
    let latency = state.latency().sample(&mut rand::thread_rng());
    tokio::time::sleep(latency).await;

    drop(in_flight);

    state
        .metrics()
        .record_http_request(start.elapsed(), "/", "GET", StatusCode::OK.as_u16());

    tracing::debug!(?latency, "Simulated load finished");
    Json(HomeResponse::with_load_time(latency.as_secs_f64()))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn message_uses_four_decimals() {
        // ---
        let body = HomeResponse::with_load_time(0.123456);
        assert_eq!(
            body.message,
            "Hello from the monitored application! Load time: 0.1235s"
        );
    }

    #[test]
    fn serializes_to_single_message_key() {
        // ---
        let json = serde_json::to_value(HomeResponse::with_load_time(0.01)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(
            object["message"],
            "Hello from the monitored application! Load time: 0.0100s"
        );
    }
}
