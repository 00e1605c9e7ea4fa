//! # Config Subcommand
//!
//! Loads and checks service configuration files (see
//! [`AppConfig`](diploma_api::state::AppConfig) for the document shape).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use diploma_api::state::AppConfig;

/// Arguments for the `diploma config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Parse and validate a configuration file.
    Check {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

/// Execute the config subcommand.
pub fn run_config(args: &ConfigArgs) -> Result<u8> {
    match &args.command {
        ConfigCommand::Check { path } => cmd_check(path),
    }
}

fn cmd_check(path: &Path) -> Result<u8> {
    match load_config_file(path) {
        Ok(config) => {
            println!(
                "OK: {} port={} max_diplomas={} issuance_fee={} authorities={} authority_contract={}",
                path.display(),
                config.server.port,
                config.registry.max_diplomas,
                config.registry.issuance_fee,
                config.authorities.len(),
                config
                    .authority_contract
                    .as_ref()
                    .map_or_else(|| "unset".to_string(), ToString::to_string),
            );
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e:#}");
            Ok(1)
        }
    }
}

/// Read, parse and validate a configuration file.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    AppConfig::from_yaml_str(&content)
        .with_context(|| format!("invalid config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("diploma.yaml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "registry:\n  issuance_fee: 5\nauthorities: [ST1TEST]\nauthority_contract: ST2TEST\n",
        );
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.registry.issuance_fee, 5);
        assert_eq!(config.authorities.len(), 1);
        assert_eq!(cmd_check(&path).unwrap(), 0);
    }

    #[test]
    fn check_reports_failure_as_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "registry:\n  max_diplomas: 0\n");
        assert!(load_config_file(&path).is_err());
        assert_eq!(cmd_check(&path).unwrap(), 1);
    }

    #[test]
    fn burn_principal_contract_fails_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            &format!("authority_contract: {}\n", diploma_core::BURN_PRINCIPAL),
        );
        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("burn principal"), "{err:#}");
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
