//! # Serve Subcommand
//!
//! Runs the HTTP service. The port is taken from `--port`, then the `PORT`
//! environment variable, then the configuration file, then 8080.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use diploma_api::state::{AppConfig, AppState};

use crate::config::load_config_file;

/// Arguments for the `diploma serve` subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Service configuration file (YAML). Defaults apply when omitted.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Listen port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute the serve subcommand. Blocks until the server stops.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => AppConfig::default(),
    };
    let port = resolve_port(args.port, std::env::var("PORT").ok().as_deref(), &config);

    let metrics = diploma_api::telemetry::install_recorder()
        .context("failed to install Prometheus recorder")?;
    let state = AppState::from_config(&config)?.with_metrics(metrics);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(serve(state, port))?;
    Ok(0)
}

async fn serve(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "diploma registry listening");
    axum::serve(listener, diploma_api::app(state))
        .await
        .context("server error")?;
    Ok(())
}

/// Pick the listen port: flag, then `PORT`, then the configuration file.
///
/// An unparsable `PORT` is ignored with a warning.
pub fn resolve_port(flag: Option<u16>, env: Option<&str>, config: &AppConfig) -> u16 {
    if let Some(port) = flag {
        return port;
    }
    if let Some(raw) = env {
        match raw.parse() {
            Ok(port) => return port,
            Err(_) => tracing::warn!(value = raw, "ignoring unparsable PORT"),
        }
    }
    config.server.port
}
