//! # Error Types
//!
//! Errors raised while constructing core values. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Registry-level failures (issuance codes, rejected updates) live in
//! `diploma-registry`; this module only covers malformed primitives.

use thiserror::Error;

/// Top-level error type for core value construction.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A content hash did not have the required length or encoding.
    #[error("invalid content hash: {0}")]
    InvalidContentHash(String),

    /// A principal string was empty or malformed.
    #[error("invalid principal: {0}")]
    InvalidPrincipal(String),

    /// A degree type string was not one of the known degrees.
    #[error("unknown degree type: {0:?}")]
    UnknownDegreeType(String),

    /// A currency string was not one of the known currencies.
    #[error("unknown currency: {0:?}")]
    UnknownCurrency(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical documents.
    /// GPA and amounts are fixed-point integers.
    #[error("float values are not permitted in canonical documents; use fixed-point integers: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
