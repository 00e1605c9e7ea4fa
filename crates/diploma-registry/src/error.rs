//! # Registry Errors
//!
//! Two shapes of failure:
//!
//! - [`IssueError`]: issuance failures. Each variant carries a stable
//!   numeric code that callers and tests match on. The codes are part of
//!   the public contract and never change meaning.
//!
//! - [`Rejected`]: the single failure of `update_diploma`,
//!   `set_authority_contract` and `set_issuance_fee`. It does not say why
//!   the call failed ("not found", "not issuer", "bad gpa" and "honors too
//!   long" are indistinguishable to the caller). The reason is emitted as a
//!   `tracing` debug event only.

use serde::Serialize;
use thiserror::Error;

/// Why an issuance was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueError {
    /// Caller is not a verified authority.
    #[error("caller is not a verified authority")]
    NotAuthorized,

    /// Institution id is zero.
    #[error("institution id must be positive")]
    InvalidInstitution,

    /// Student id is zero.
    #[error("student id must be positive")]
    InvalidStudent,

    /// Template id is zero.
    #[error("template id must be positive")]
    InvalidTemplate,

    /// Content hash is not exactly 32 bytes.
    #[error("content hash must be exactly 32 bytes")]
    InvalidHash,

    /// Issuance date lies before the current block height.
    #[error("issuance date is in the past")]
    InvalidIssuanceDate,

    /// A diploma with this content hash already exists.
    #[error("a diploma with this content hash was already issued")]
    AlreadyIssued,

    /// No authority contract has been configured to receive the fee.
    #[error("authority contract is not configured")]
    AuthorityNotConfigured,

    /// GPA above 400.
    #[error("gpa must be between 0 and 400")]
    InvalidGpa,

    /// Degree type is not Bachelor, Master or PhD.
    #[error("unknown degree type")]
    InvalidDegreeType,

    /// The registry reached its capacity.
    #[error("maximum number of diplomas reached")]
    MaxDiplomasExceeded,

    /// Honors longer than 50 characters.
    #[error("honors exceed 50 characters")]
    InvalidHonors,

    /// Major empty or longer than 100 characters.
    #[error("major must be 1 to 100 characters")]
    InvalidMajor,

    /// Minor longer than 100 characters.
    #[error("minor exceeds 100 characters")]
    InvalidMinor,

    /// Location empty or longer than 100 characters.
    #[error("location must be 1 to 100 characters")]
    InvalidLocation,

    /// Currency is not STX, USD or BTC.
    #[error("unknown currency")]
    InvalidCurrency,

    /// The transfer sink refused the issuance fee.
    #[error("issuance fee transfer was refused")]
    FeeTransferFailed,

    /// Expiry lies before the current block height.
    #[error("expiry is in the past")]
    InvalidExpiry,

    /// Credits are zero.
    #[error("credits must be positive")]
    InvalidCredits,

    /// Thesis title longer than 200 characters.
    #[error("thesis title exceeds 200 characters")]
    InvalidThesis,

    /// Advisor longer than 100 characters.
    #[error("advisor exceeds 100 characters")]
    InvalidAdvisor,

    /// More than five committee members.
    #[error("committee has more than 5 members")]
    InvalidCommittee,
}

impl IssueError {
    /// All issuance errors in code order.
    pub fn all() -> &'static [IssueError] {
        &[
            Self::NotAuthorized,
            Self::InvalidInstitution,
            Self::InvalidStudent,
            Self::InvalidTemplate,
            Self::InvalidHash,
            Self::InvalidIssuanceDate,
            Self::AlreadyIssued,
            Self::AuthorityNotConfigured,
            Self::InvalidGpa,
            Self::InvalidDegreeType,
            Self::MaxDiplomasExceeded,
            Self::InvalidHonors,
            Self::InvalidMajor,
            Self::InvalidMinor,
            Self::InvalidLocation,
            Self::InvalidCurrency,
            Self::FeeTransferFailed,
            Self::InvalidExpiry,
            Self::InvalidCredits,
            Self::InvalidThesis,
            Self::InvalidAdvisor,
            Self::InvalidCommittee,
        ]
    }

    /// The stable numeric code reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized => 100,
            Self::InvalidInstitution => 101,
            Self::InvalidStudent => 102,
            Self::InvalidTemplate => 103,
            Self::InvalidHash => 104,
            Self::InvalidIssuanceDate => 105,
            Self::AlreadyIssued => 106,
            Self::AuthorityNotConfigured => 109,
            Self::InvalidGpa => 110,
            Self::InvalidDegreeType => 111,
            Self::MaxDiplomasExceeded => 114,
            Self::InvalidHonors => 115,
            Self::InvalidMajor => 116,
            Self::InvalidMinor => 117,
            Self::InvalidLocation => 118,
            Self::InvalidCurrency => 119,
            Self::FeeTransferFailed => 120,
            Self::InvalidExpiry => 121,
            Self::InvalidCredits => 122,
            Self::InvalidThesis => 123,
            Self::InvalidAdvisor => 124,
            Self::InvalidCommittee => 125,
        }
    }

    /// Machine-readable name, e.g. `"INVALID_GPA"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::InvalidInstitution => "INVALID_INSTITUTION",
            Self::InvalidStudent => "INVALID_STUDENT",
            Self::InvalidTemplate => "INVALID_TEMPLATE",
            Self::InvalidHash => "INVALID_HASH",
            Self::InvalidIssuanceDate => "INVALID_ISSUANCE_DATE",
            Self::AlreadyIssued => "DIPLOMA_ALREADY_ISSUED",
            Self::AuthorityNotConfigured => "AUTHORITY_NOT_CONFIGURED",
            Self::InvalidGpa => "INVALID_GPA",
            Self::InvalidDegreeType => "INVALID_DEGREE_TYPE",
            Self::MaxDiplomasExceeded => "MAX_DIPLOMAS_EXCEEDED",
            Self::InvalidHonors => "INVALID_HONORS",
            Self::InvalidMajor => "INVALID_MAJOR",
            Self::InvalidMinor => "INVALID_MINOR",
            Self::InvalidLocation => "INVALID_LOCATION",
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::FeeTransferFailed => "FEE_TRANSFER_FAILED",
            Self::InvalidExpiry => "INVALID_EXPIRY",
            Self::InvalidCredits => "INVALID_CREDITS",
            Self::InvalidThesis => "INVALID_THESIS",
            Self::InvalidAdvisor => "INVALID_ADVISOR",
            Self::InvalidCommittee => "INVALID_COMMITTEE",
        }
    }

    /// Look an error up by its numeric code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.code() == code)
    }
}

/// Undiscriminated failure of an update or configuration call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("operation rejected")]
pub struct Rejected;
