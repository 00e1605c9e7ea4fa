//! # Registry Configuration
//!
//! Capacity and the initial issuance fee. Both have defaults, so an empty
//! document is a valid configuration. Unknown keys are rejected to catch
//! typos in deployment files.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default capacity of a registry.
pub const DEFAULT_MAX_DIPLOMAS: u64 = 1_000_000;

/// Default issuance fee.
pub const DEFAULT_ISSUANCE_FEE: u64 = 100;

/// Errors loading or validating a registry configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The YAML document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is outside its accepted range.
    #[error("invalid configuration value: {0}")]
    Invalid(String),
}

/// Static parameters of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Maximum number of diplomas the registry will ever hold.
    pub max_diplomas: u64,
    /// Fee charged per issuance until changed through `set_issuance_fee`.
    pub issuance_fee: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_diplomas: DEFAULT_MAX_DIPLOMAS,
            issuance_fee: DEFAULT_ISSUANCE_FEE,
        }
    }
}

impl RegistryConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_diplomas == 0 {
            return Err(ConfigError::Invalid(
                "max_diplomas must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
