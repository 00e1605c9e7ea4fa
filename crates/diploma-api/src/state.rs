//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! - **Registry**: the [`SharedRegistry`] handle. One lock, held only for
//!   the duration of a single registry call and never across `.await`.
//! - **Authorities**: the in-memory [`AuthoritySet`] the registry consults.
//! - **Transfers**: the [`TransferLog`] receiving issuance fees.
//! - **Clock**: a [`ManualClock`] standing in for the host ledger's block
//!   height. Advanced through `/v1/chain/advance`.
//! - **Metrics**: the Prometheus handle, present only when the binary
//!   installed a recorder.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use diploma_core::{BlockClock, BlockHeight, ManualClock, Principal};
use diploma_registry::{
    AuthoritySet, CallContext, ConfigError, DiplomaRegistry, RegistryConfig, SharedRegistry,
    TransferLog,
};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Service configuration document.
///
/// ```yaml
/// server:
///   port: 8080
/// registry:
///   max_diplomas: 1000000
///   issuance_fee: 100
/// authorities:
///   - ST1TEST
/// authority_contract: ST2TEST
/// start_height: 0
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
    /// Principals verified as issuing authorities at boot.
    pub authorities: Vec<Principal>,
    /// Applied once at boot when present.
    pub authority_contract: Option<Principal>,
    /// Initial block height of the dev clock.
    pub start_height: BlockHeight,
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and the boot-time authority contract.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()?;
        if let Some(contract) = &self.authority_contract {
            if contract.is_burn() {
                return Err(ConfigError::Invalid(format!(
                    "authority_contract must not be the burn principal {contract}"
                )));
            }
        }
        Ok(())
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub authorities: Arc<AuthoritySet>,
    pub transfers: Arc<TransferLog>,
    pub clock: Arc<ManualClock>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from a configuration document.
    ///
    /// The configuration is validated first; the authority contract, when
    /// given, is applied through the registry's write-once setter.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let authorities = Arc::new(AuthoritySet::new(config.authorities.iter().cloned()));
        let transfers = Arc::new(TransferLog::new());
        let registry = SharedRegistry::new(DiplomaRegistry::new(
            config.registry.clone(),
            authorities.clone(),
            transfers.clone(),
        ));
        if let Some(contract) = &config.authority_contract {
            registry.set_authority_contract(contract.clone()).map_err(|_| {
                ConfigError::Invalid(format!("authority contract {contract} was refused"))
            })?;
        }

        tracing::info!(
            authorities = authorities.len(),
            max_diplomas = config.registry.max_diplomas,
            issuance_fee = config.registry.issuance_fee,
            start_height = config.start_height.value(),
            "registry state initialized"
        );

        Ok(Self {
            registry,
            authorities,
            transfers,
            clock: Arc::new(ManualClock::starting_at(config.start_height)),
            metrics: None,
        })
    }

    /// Attach a Prometheus handle so `/metrics` can render.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Call context for `caller` at the current block height.
    pub fn call_context(&self, caller: Principal) -> CallContext {
        CallContext::new(caller, self.clock.block_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.registry.max_diplomas, 1_000_000);
    }

    #[test]
    fn full_document_parses() {
        let yaml = "\
server:
  port: 9090
registry:
  max_diplomas: 10
  issuance_fee: 25
authorities:
  - ST1TEST
  - ST3PEER
authority_contract: ST2TEST
start_height: 42
";
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.registry.issuance_fee, 25);
        assert_eq!(config.authorities.len(), 2);
        assert_eq!(
            config.authority_contract,
            Some(Principal::new("ST2TEST").unwrap())
        );
        assert_eq!(config.start_height, BlockHeight(42));
    }

    #[test]
    fn burn_contract_rejected() {
        let yaml = format!("authority_contract: {}\n", diploma_core::BURN_PRINCIPAL);
        let err = AppConfig::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = AppConfig::from_yaml_str("registry:\n  max_diplomas: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = AppConfig::from_yaml_str("authority: ST1TEST\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_config_applies_contract_and_clock() {
        let config = AppConfig {
            authorities: vec![Principal::new("ST1TEST").unwrap()],
            authority_contract: Some(Principal::new("ST2TEST").unwrap()),
            start_height: BlockHeight(7),
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(
            state.registry.snapshot().authority_contract,
            Some(Principal::new("ST2TEST").unwrap())
        );
        assert!(state
            .registry
            .is_verified_authority(&Principal::new("ST1TEST").unwrap()));
        let ctx = state.call_context(Principal::new("ST1TEST").unwrap());
        assert_eq!(ctx.block_height, BlockHeight(7));
        assert!(state.metrics.is_none());
    }
}
