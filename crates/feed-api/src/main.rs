//! Feed API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-api
//! ```
//!
//! Configuration is loaded from environment variables.

use feed_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing(TracingConfig::default()) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Feed API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        feed_window = config.feed.source_fetch_window,
        "Configuration loaded"
    );

    // Run the server
    feed_api::run(config).await?;

    Ok(())
}
