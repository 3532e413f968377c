// src/config.rs

//! Service configuration loaded from environment variables.
//!
//! Each binary loads its own section once at startup. Tuning values that are
//! missing or unparsable fall back to their defaults; values that parse but
//! make no sense together (an inverted latency range) are startup errors.

use crate::domain::{LatencyRange, MetricsKind};
use anyhow::Result;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

/// Reads an optional environment variable as a plain string.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key).unwrap_or_else(|_| $default.to_string())
    };
}

// ============================================================
// Todo service configuration
// ============================================================

mod todo {
    // ---

    /// Configuration for the static todo service.
    #[derive(Debug, Clone)]
    pub struct TodoConfig {
        /// Listen address. Defaults to `0.0.0.0:8000`.
        pub bind_addr: String,
    }

    impl TodoConfig {
        /// Builds a [`TodoConfig`] from environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            // ---
            let bind_addr = optional_env!("TODO_BIND_ADDR", "0.0.0.0:8000");

            Ok(Self { bind_addr })
        }
    }
}
pub use todo::TodoConfig;

// ============================================================
// Monitored service configuration
// ============================================================

mod monitored {
    // ---
    use super::*;

    /// Configuration for the instrumented greeting service.
    #[derive(Debug, Clone)]
    pub struct MonitoredConfig {
        /// Listen address. Defaults to `0.0.0.0:5000`.
        pub bind_addr: String,

        /// Metrics backend. Defaults to Prometheus.
        pub metrics_type: MetricsKind,

        /// Bounds of the simulated work done by `GET /`. Defaults to 10ms..500ms.
        pub latency: LatencyRange,
    }

    impl MonitoredConfig {
        /// Builds a [`MonitoredConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if the latency bounds are negative, too large or inverted.
        pub fn from_env() -> Result<Self> {
            // ---
            let bind_addr = optional_env!("MONITOR_BIND_ADDR", "0.0.0.0:5000");
            let metrics_type =
                optional_env_parse!("MONITOR_METRICS_TYPE", MetricsKind, MetricsKind::Prom);

            let defaults = LatencyRange::default();
            let min_secs = optional_env_parse!(
                "MONITOR_LATENCY_MIN_SEC",
                f64,
                defaults.min().as_secs_f64()
            );
            let max_secs = optional_env_parse!(
                "MONITOR_LATENCY_MAX_SEC",
                f64,
                defaults.max().as_secs_f64()
            );
            let latency = LatencyRange::from_secs_f64(min_secs, max_secs)?;

            Ok(Self {
                bind_addr,
                metrics_type,
                latency,
            })
        }
    }

    impl Default for MonitoredConfig {
        fn default() -> Self {
            // ---
            Self {
                bind_addr: "0.0.0.0:5000".to_string(),
                metrics_type: MetricsKind::Prom,
                latency: LatencyRange::default(),
            }
        }
    }
}
pub use monitored::MonitoredConfig;

// ============================================================
// Tests
// ============================================================
