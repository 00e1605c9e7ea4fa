//! # Content Hash: Document Identity
//!
//! A `ContentHash` is the 32-byte value that identifies the document
//! behind a diploma. The registry indexes records by it and refuses a
//! second issuance under the same hash.
//!
//! ## Invariant
//!
//! A `ContentHash` always holds exactly 32 bytes. Equality and hashing are
//! over the raw array, never over an encoding of it, so two hashes collide
//! in the duplicate index iff their bytes are identical.
//!
//! Issuers normally compute the hash off-registry. [`ContentHash::of_bytes`]
//! and [`sha256_document`] provide the SHA-256 paths used by the CLI.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::CoreError;

/// Required length of a content hash in bytes.
pub const CONTENT_HASH_LEN: usize = 32;

/// A fixed-length 32-byte content hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash([u8; CONTENT_HASH_LEN]);

impl ContentHash {
    /// Wrap a 32-byte array.
    pub fn new(bytes: [u8; CONTENT_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a content hash from a slice, rejecting any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; CONTENT_HASH_LEN] = bytes.try_into().map_err(|_| {
            CoreError::InvalidContentHash(format!(
                "content hash must be {CONTENT_HASH_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Parse a content hash from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, CoreError> {
        let bytes = hex_to_bytes(hex)?;
        Self::from_slice(&bytes)
    }

    /// SHA-256 of raw document bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        let mut bytes = [0u8; CONTENT_HASH_LEN];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Return the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; CONTENT_HASH_LEN] {
        &self.0
    }

    /// Render the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// SHA-256 content hash of a structured document in canonical form.
///
/// Accepts only `&CanonicalBytes`, so key order and float handling cannot
/// make two encodings of the same document hash differently.
pub fn sha256_document(data: &CanonicalBytes) -> ContentHash {
    ContentHash::of_bytes(data.as_bytes())
}

/// Decode a hex string of even length into bytes.
///
/// Leading and trailing whitespace is ignored and an optional `0x` prefix
/// is accepted.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, CoreError> {
    let hex = hex.trim();
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if hex.len() % 2 != 0 {
        return Err(CoreError::InvalidContentHash(format!(
            "hex string has odd length: {}",
            hex.len()
        )));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| {
                    CoreError::InvalidContentHash(format!("invalid hex at position {i}"))
                })
        })
        .collect()
}

impl std::fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentHash({})", self.to_hex())
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ContentHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ContentHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ContentHash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
