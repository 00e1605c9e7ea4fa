//! # Diploma Records
//!
//! [`IssueRequest`] is what an issuer submits: raw, unvalidated fields.
//! The content hash arrives as a byte vector of any length and the degree
//! type and currency as free strings, so the checklist can refuse each of
//! them with its own code.
//!
//! [`DiplomaRecord`] is what the registry stores once every check passed.
//! [`DiplomaUpdateRecord`] is the latest update applied to a record; there
//! is at most one per diploma and each update replaces it.

use serde::{Deserialize, Serialize};

use diploma_core::{BlockHeight, ContentHash, Currency, DegreeType, Principal};

/// Unvalidated issuance input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRequest {
    pub institution_id: u64,
    pub student_id: u64,
    pub template_id: u64,
    /// Raw content hash bytes; must be exactly 32.
    pub content_hash: Vec<u8>,
    pub issuance_date: BlockHeight,
    pub degree_type: String,
    /// Fixed-point GPA, 350 means 3.50.
    pub gpa: u32,
    pub honors: String,
    pub major: String,
    pub minor: String,
    pub location: String,
    pub currency: String,
    pub expiry: BlockHeight,
    pub credits: u64,
    pub thesis_title: String,
    pub advisor: String,
    /// Committee member names, at most five. Free text.
    pub committee: Vec<String>,
}

/// A stored diploma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiplomaRecord {
    pub institution_id: u64,
    pub student_id: u64,
    pub template_id: u64,
    pub content_hash: ContentHash,
    pub issuance_date: BlockHeight,
    /// Block height of the last mutation (issuance or update).
    pub timestamp: BlockHeight,
    /// The caller that issued the diploma; the only principal allowed to update it.
    pub issuer: Principal,
    pub degree_type: DegreeType,
    pub gpa: u32,
    pub honors: String,
    pub major: String,
    pub minor: String,
    pub location: String,
    pub currency: Currency,
    /// Always `true` at creation.
    pub status: bool,
    pub expiry: BlockHeight,
    pub credits: u64,
    pub thesis_title: String,
    pub advisor: String,
    pub committee: Vec<String>,
}

/// The most recent update applied to a diploma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiplomaUpdateRecord {
    pub update_gpa: u32,
    pub update_honors: String,
    pub update_timestamp: BlockHeight,
    pub updater: Principal,
}
