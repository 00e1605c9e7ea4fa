//! # diploma-core: Foundational Types for the Diploma Registry
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! speaks in, so that the registry never handles bare strings or byte
//! vectors where a domain value is meant.
//!
//! ## Key Design Principles
//!
//! 1. **Newtypes for identities and clocks.** `Principal`, `DiplomaId` and
//!    `BlockHeight` cannot be swapped for each other or for raw integers.
//!
//! 2. **`ContentHash` is exactly 32 bytes.** The only fallible constructors
//!    check the length; equality and hashing are over the raw array, so the
//!    duplicate index is byte-exact.
//!
//! 3. **`CanonicalBytes` for document hashing.** Hashing a structured
//!    diploma document goes through sorted-key, float-free JSON so two
//!    issuers hashing the same document get the same content hash.
//!
//! 4. **Closed enums.** `DegreeType` and `Currency` have exhaustive
//!    variants with stable string forms.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `diploma-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod domain;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_document, ContentHash, CONTENT_HASH_LEN};
pub use domain::{Currency, DegreeType};
pub use error::{CanonicalizationError, CoreError};
pub use identity::{DiplomaId, Principal, BURN_PRINCIPAL};
pub use temporal::{BlockClock, BlockHeight, ManualClock};
