//! # diploma-registry: Diploma Issuance Registry
//!
//! An append-mostly table of academic diplomas keyed by a dense numeric id,
//! with a secondary index from content hash to id.
//!
//! ## Operations
//!
//! | Operation | Failure |
//! |-----------|---------|
//! | `issue_diploma` | [`IssueError`], one stable code per check |
//! | `update_diploma` | [`Rejected`] |
//! | `set_authority_contract` | [`Rejected`] |
//! | `set_issuance_fee` | [`Rejected`] |
//! | `get_diploma`, `get_diploma_update`, `get_diploma_count`, `check_diploma_existence`, `is_verified_authority` | infallible |
//!
//! ## Collaborators
//!
//! The caller identity and block height arrive per call in a
//! [`CallContext`]. Authority membership and fee settlement belong to the
//! host and are reached through [`AuthorityOracle`] and [`TransferSink`].
//!
//! ## Crate Policy
//!
//! - Depends only on `diploma-core` among workspace crates.
//! - No I/O. Configuration arrives as a parsed [`RegistryConfig`].
//! - No `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod ledger;
pub mod record;
pub mod registry;
pub mod shared;
pub mod validation;

pub use config::{ConfigError, RegistryConfig, DEFAULT_ISSUANCE_FEE, DEFAULT_MAX_DIPLOMAS};
pub use error::{IssueError, Rejected};
pub use ledger::{
    AuthorityOracle, AuthoritySet, FeeTransfer, TransferError, TransferLog, TransferSink,
};
pub use record::{DiplomaRecord, DiplomaUpdateRecord, IssueRequest};
pub use registry::{CallContext, DiplomaRegistry};
pub use shared::{RegistrySnapshot, SharedRegistry};
