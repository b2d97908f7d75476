//! # da-server
//!
//! Startup order: parse flags, install logging, validate, select the backend,
//! start the server, then wait for Ctrl+C and shut down gracefully.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use da_server::{init_logging, Args, DaServer};
use sunrise_alt_da::StoreBackend;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_config()).context("failed to initialize logging")?;
    args.validate().context("invalid configuration")?;

    let span = tracing::info_span!("da_server");
    let backend = StoreBackend::select(&args.backend_settings(), &span)
        .context("failed to select alt-DA backend")?;

    let mut server = DaServer::new(args.listen_addr(), Arc::new(backend), span.clone());
    server.start().await.context("failed to start DA server")?;
    info!(
        parent: &span,
        endpoint = %server.endpoint().unwrap_or_default(),
        "started DA server"
    );

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    info!(parent: &span, "shutting down");
    server.stop().await.context("failed to stop DA server")?;
    Ok(())
}
