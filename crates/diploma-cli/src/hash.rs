//! # Hash Subcommand
//!
//! Computes the content hash an issuer submits with a diploma.
//!
//! - `hash file` hashes the raw bytes of any file.
//! - `hash json` hashes the canonical form of a JSON document (sorted keys,
//!   compact, no floats), so key order and whitespace do not matter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use diploma_core::{sha256_document, CanonicalBytes, ContentHash};

/// Arguments for the `diploma hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    #[command(subcommand)]
    pub command: HashCommand,
}

/// Hash subcommands.
#[derive(Subcommand, Debug)]
pub enum HashCommand {
    /// SHA-256 of a file's raw bytes.
    File {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// SHA-256 of a JSON document's canonical form.
    Json {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let hash = match &args.command {
        HashCommand::File { path } => hash_file(path)?,
        HashCommand::Json { path } => hash_json(path)?,
    };
    println!("{}", hash.to_hex());
    Ok(0)
}

/// Content hash of a file's raw bytes.
pub fn hash_file(path: &Path) -> Result<ContentHash> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    Ok(ContentHash::of_bytes(&bytes))
}

/// Content hash of a JSON document in canonical form.
pub fn hash_json(path: &Path) -> Result<ContentHash> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))?;
    let canonical = CanonicalBytes::new(&value)
        .with_context(|| format!("failed to canonicalize: {}", path.display()))?;
    Ok(sha256_document(&canonical))
}
