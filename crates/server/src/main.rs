//! Medibase server
//!
//! Hospital record management backend over MongoDB.

use clap::Parser;
use medibase_persistence::MongoStore;
use medibase_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::{error, info};

/// Starts the Axum HTTP server and blocks until shutdown is requested.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to install shutdown signal handler");
        return;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.db_name,
        "Starting Medibase server"
    );

    // One store handle for the process; a clone stays behind so the client
    // can be released after the listener stops.
    let store = MongoStore::connect(&config.mongo_url, &config.db_name).await?;
    let store_handle = store.clone();

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await?;

    store_handle.shutdown().await;

    Ok(())
}
