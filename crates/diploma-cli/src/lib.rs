//! # diploma-cli: Diploma Registry Command-Line Interface
//!
//! ## Subcommands
//!
//! - `serve`: run the HTTP service
//! - `hash`: content hash of a raw file or a canonicalized JSON document
//! - `config`: check a service configuration file
//! - `codes`: the issuance error code table
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `diploma-core`, `diploma-registry` and
//!   `diploma-api`; no registry logic lives here.
//! - Handlers return `anyhow::Result<u8>`, the process exit code.

pub mod codes;
pub mod config;
pub mod hash;
pub mod serve;
