use anyhow::Result;
use greeting_services::{create_todo_router, init_tracing, shutdown_signal, TodoConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env file if there is one
    dotenvy::dotenv().ok();
    init_tracing();

    let config = TodoConfig::from_env()?;
    let app = create_todo_router();

    info!("Starting at endpoint:{}", config.bind_addr);
    info!("Starting todo service v{}...", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
