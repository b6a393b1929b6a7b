//! Vendor Service
//!
//! Vendor and vendor-material catalog with price comparison, built with
//! Tokio, Axum and sqlx.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server ──▶ routing table ──▶ handlers ──▶ VendorStore ──▶ MySQL
//!                     (CORS, ids,      (method +          (validation,   (sqlx pool)
//!                      tracing)         path → action)     envelope)
//!     Client Response
//!     ◀────────────── { success, message, count, data }
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use vendor_service::config::load_config;
use vendor_service::http::HttpServer;
use vendor_service::lifecycle::{open_store, shutdown_signal};
use vendor_service::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "vendor-service")]
#[command(about = "Vendor and material catalog service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init(&config.observability.log_level);
    tracing::info!("vendor-service v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = ?config.database.backend,
        database = %config.database.name,
        "Configuration loaded"
    );

    let store = match open_store(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "Cannot connect to database");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config, store.clone());
    let result = server.run(listener, shutdown_signal()).await;

    store.close().await;
    result?;

    tracing::info!("Shutdown complete");
    Ok(())
}
