//! Demo server for the JSON responder.
//!
//! ```text
//! --config file ──▶ load_config ──▶ init_logging
//!                                └─▶ Responder ──▶ demo router ──▶ axum::serve
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use json_respond::config::{load_config, ServiceConfig};
use json_respond::observability::init_logging;
use json_respond::{demo, Responder};

#[derive(Parser)]
#[command(name = "json-respond-demo")]
#[command(about = "Serve example JSON and error responses", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        return_nulls = config.respond.return_nulls,
        default_status_code = config.respond.default_status_code,
        return_raw_error = config.respond.return_raw_error,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let responder = Responder::new(config.respond);

    demo::serve(listener, responder, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
