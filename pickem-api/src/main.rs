//! pickem-api - weighted activity picker service
//!
//! Serves the catalog of categorized activities over HTTP and picks one at
//! random, weighted by interest and effort.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pickem_api::{build_router, AppState};
use pickem_common::config::{CliOverrides, ServiceConfig};
use pickem_common::CatalogStore;
use tokio::signal;
use tracing::{error, info};

/// Command-line arguments for pickem-api
///
/// Anything not given here falls back to PICKEM_* environment variables,
/// then the TOML config file, then built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "pickem-api")]
#[command(about = "Weighted random activity picker")]
#[command(version)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON document
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Host to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        Self {
            config: args.config,
            data_file: args.data_file,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Subscriber first, so config resolution can log
    let logging = pickem_api::logging::init(args.log_level.as_deref())?;
    let config = ServiceConfig::resolve(args.into()).context("Failed to resolve configuration")?;
    logging.apply_level(&config.log_level)?;

    info!("Starting pickem-api v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog file: {}", config.data_file.display());

    let store = CatalogStore::open(&config.data_file)
        .await
        .with_context(|| format!("Failed to load catalog {}", config.data_file.display()))?;

    let app = build_router(AppState::new(store));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("pickem-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
