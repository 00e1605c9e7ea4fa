//! # Ledger Collaborators
//!
//! The registry does not own the authority set or move value. Both are
//! provided by the host ledger and reached through two traits:
//!
//! - [`AuthorityOracle`]: membership test for the set of principals
//!   allowed to issue. The registry only queries it.
//! - [`TransferSink`]: receives the issuance fee transfer. The registry
//!   only requires that the transfer is attempted with the exact configured
//!   amount; settlement is the sink's concern.
//!
//! [`AuthoritySet`] and [`TransferLog`] are in-memory implementations used
//! by the development server and the tests.

use std::collections::BTreeSet;

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use diploma_core::Principal;

/// Membership test for verified issuing authorities.
pub trait AuthorityOracle: Send + Sync {
    /// Whether `principal` may issue diplomas.
    fn is_verified_authority(&self, principal: &Principal) -> bool;
}

/// An issuance fee moving from the issuer to the authority contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTransfer {
    pub amount: u64,
    pub from: Principal,
    pub to: Principal,
}

/// Why a transfer sink refused a fee.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The payer cannot cover the amount.
    #[error("insufficient funds: {payer} cannot pay {amount}")]
    InsufficientFunds {
        /// The paying principal.
        payer: Principal,
        /// The requested amount.
        amount: u64,
    },

    /// The sink refused for another reason.
    #[error("transfer refused: {0}")]
    Refused(String),
}

/// Destination for issuance fee transfers.
pub trait TransferSink: Send + Sync {
    /// Execute or record `transfer`. An error aborts the issuance.
    fn transfer(&self, transfer: &FeeTransfer) -> Result<(), TransferError>;
}

/// In-memory authority set.
///
/// The host grants and revokes membership; the registry sees it only
/// through [`AuthorityOracle`].
#[derive(Debug, Default)]
pub struct AuthoritySet {
    members: RwLock<BTreeSet<Principal>>,
}

impl AuthoritySet {
    /// Create a set holding `members`.
    pub fn new(members: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().collect()),
        }
    }

    /// Add a principal. Returns `false` if it was already a member.
    pub fn grant(&self, principal: Principal) -> bool {
        self.members.write().insert(principal)
    }

    /// Remove a principal. Returns `false` if it was not a member.
    pub fn revoke(&self, principal: &Principal) -> bool {
        self.members.write().remove(principal)
    }

    /// Current members in sorted order.
    pub fn members(&self) -> Vec<Principal> {
        self.members.read().iter().cloned().collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuthorityOracle for AuthoritySet {
    fn is_verified_authority(&self, principal: &Principal) -> bool {
        self.members.read().contains(principal)
    }
}

/// Append-only record of every fee transfer, in order.
///
/// Accepts every transfer. The log is the audit trail the host reads back.
#[derive(Debug, Default)]
pub struct TransferLog {
    entries: Mutex<Vec<FeeTransfer>>,
}

impl TransferLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded transfers, oldest first.
    pub fn transfers(&self) -> Vec<FeeTransfer> {
        self.entries.lock().clone()
    }

    /// Number of recorded transfers.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all recorded amounts.
    pub fn total_amount(&self) -> u64 {
        self.entries
            .lock()
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.amount))
    }
}

impl TransferSink for TransferLog {
    fn transfer(&self, transfer: &FeeTransfer) -> Result<(), TransferError> {
        self.entries.lock().push(transfer.clone());
        Ok(())
    }
}
