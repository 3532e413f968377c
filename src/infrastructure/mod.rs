pub mod metrics;

// Re-export the factory functions for easy access
pub use metrics::{create as create_metrics, create_noop_metrics, create_prom_metrics};
