use anyhow::Result;
use greeting_services::{create_monitored_router, init_tracing, shutdown_signal, MonitoredConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env file if there is one
    dotenvy::dotenv().ok();
    init_tracing();

    let config = MonitoredConfig::from_env()?;
    info!(
        "Metrics backend: {:?}, simulated latency: {:?}..={:?}",
        config.metrics_type,
        config.latency.min(),
        config.latency.max()
    );

    let app = create_monitored_router(&config)?;

    info!("Starting at endpoint:{}", config.bind_addr);
    info!("Starting monitored service v{}...", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
