//! # Closed Domain Enums
//!
//! `DegreeType` and `Currency` are the two enumerated fields of a diploma.
//! Requests carry them as free strings; parsing through `FromStr` is how
//! the registry decides membership. Parsing is case-sensitive: `"phd"` is
//! not a degree.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// The academic degree a diploma certifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeType {
    /// Undergraduate degree.
    Bachelor,
    /// Graduate degree.
    Master,
    /// Doctorate.
    #[serde(rename = "PhD")]
    Phd,
}

impl DegreeType {
    /// All degree types in declaration order.
    pub fn all() -> &'static [DegreeType] {
        &[Self::Bachelor, Self::Master, Self::Phd]
    }

    /// The wire form of this degree type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Phd => "PhD",
        }
    }
}

impl std::fmt::Display for DegreeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bachelor" => Ok(Self::Bachelor),
            "Master" => Ok(Self::Master),
            "PhD" => Ok(Self::Phd),
            other => Err(CoreError::UnknownDegreeType(other.to_string())),
        }
    }
}

/// Currency denomination recorded on the diploma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Stacks token.
    #[serde(rename = "STX")]
    Stx,
    /// US dollar.
    #[serde(rename = "USD")]
    Usd,
    /// Bitcoin.
    #[serde(rename = "BTC")]
    Btc,
}

impl Currency {
    /// All currencies in declaration order.
    pub fn all() -> &'static [Currency] {
        &[Self::Stx, Self::Usd, Self::Btc]
    }

    /// The wire form of this currency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stx => "STX",
            Self::Usd => "USD",
            Self::Btc => "BTC",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STX" => Ok(Self::Stx),
            "USD" => Ok(Self::Usd),
            "BTC" => Ok(Self::Btc),
            other => Err(CoreError::UnknownCurrency(other.to_string())),
        }
    }
}
