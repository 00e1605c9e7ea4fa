//! # diploma CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use diploma_cli::codes::{run_codes, CodesArgs};
use diploma_cli::config::{run_config, ConfigArgs};
use diploma_cli::hash::{run_hash, HashArgs};
use diploma_cli::serve::{run_serve, ServeArgs};

/// Diploma registry: issuance service and tooling.
#[derive(Parser, Debug)]
#[command(name = "diploma", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service.
    Serve(ServeArgs),

    /// Compute the content hash of a file or JSON document.
    Hash(HashArgs),

    /// Check a service configuration file.
    Config(ConfigArgs),

    /// List issuance error codes, or explain one.
    Codes(CodesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json_logs = matches!(&cli.command, Commands::Serve(args) if args.json_logs);
    if json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match &cli.command {
        Commands::Serve(args) => run_serve(args),
        Commands::Hash(args) => run_hash(args),
        Commands::Config(args) => run_config(args),
        Commands::Codes(args) => run_codes(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
