//! Game Store API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p store-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use store_common::{try_init_tracing_with_config, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set
    let dotenv = dotenvy::dotenv();

    let env = std::env::var("APP_ENV")
        .or_else(|_| std::env::var("NODE_ENV"))
        .ok()
        .and_then(|value| Environment::parse(&value))
        .unwrap_or_default();

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }
    if let Err(e) = dotenv {
        if !e.not_found() {
            error!(error = %e, "Failed to read .env file");
        }
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Game Store API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        upload_dir = %config.storage.upload_dir,
        "Configuration loaded"
    );

    // Run the server
    store_api::run(config).await?;

    Ok(())
}
