use anyhow::Context;
use embeddings_handler::{setup_tracing, Configuration};
use std::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads the .env file located in the environment's current directory or its parents in sequence.
    // .env used only for development, so we discard error in all other cases.
    dotenv::dotenv().ok();

    // Tries to load tracing config from environment (RUST_LOG) or uses "info".
    setup_tracing();

    // Parse configuration from the environment.
    tracing::debug!("Initializing configuration");
    let cfg = Configuration::new().context("Failed to load configuration")?;

    let listener = TcpListener::bind(cfg.listen_address)
        .with_context(|| format!("Failed to bind {}", cfg.listen_address))?;

    // Spin up our server.
    tracing::info!("Starting server on {}...", cfg.listen_address);
    embeddings_handler::run(listener, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", err);
        std::future::pending::<()>().await;
    }
}
