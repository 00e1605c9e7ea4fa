//! # Identity Newtypes
//!
//! `Principal` names a caller, an issuer or the fee-receiving authority
//! contract. `DiplomaId` is the dense sequential key of the registry table.
//! Keeping them as distinct types stops a diploma id from being passed
//! where a fee amount or block height is expected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// The reserved burn principal. It can never become the authority contract.
pub const BURN_PRINCIPAL: &str = "SP000000000000000000002Q6VF78";

/// Longest principal string accepted (standard address plus contract name).
const MAX_PRINCIPAL_LEN: usize = 150;

/// A ledger identity: a standard address or a contract principal.
///
/// Construction rejects empty strings, whitespace and over-long values.
/// The registry never interprets the contents beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Validate and wrap a principal string.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CoreError::InvalidPrincipal("principal must not be empty".into()));
        }
        if value.len() > MAX_PRINCIPAL_LEN {
            return Err(CoreError::InvalidPrincipal(format!(
                "principal exceeds {MAX_PRINCIPAL_LEN} bytes: {} bytes",
                value.len()
            )));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidPrincipal(format!(
                "principal contains whitespace: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// The reserved burn principal.
    pub fn burn() -> Self {
        Self(BURN_PRINCIPAL.to_string())
    }

    /// Whether this is the reserved burn principal.
    pub fn is_burn(&self) -> bool {
        self.0 == BURN_PRINCIPAL
    }

    /// Borrow the principal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Principal {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Principal> for String {
    fn from(p: Principal) -> Self {
        p.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequential identifier of an issued diploma, assigned densely from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiplomaId(pub u64);

impl DiplomaId {
    /// The first id ever assigned.
    pub const FIRST: DiplomaId = DiplomaId(0);

    /// Access the inner integer.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for DiplomaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "diploma:{}", self.0)
    }
}
