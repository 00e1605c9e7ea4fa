//! # Shared Registry Handle
//!
//! Cloneable, thread-safe handle to one [`DiplomaRegistry`].
//!
//! Every operation takes the lock once and runs to completion under it, so
//! the capacity check, the duplicate check and the insert of an issuance
//! are a single atomic step. The lock is `parking_lot` and is never held
//! across an `.await`. Reads return owned clones so callers never hold a
//! guard.

use std::sync::Arc;

use parking_lot::Mutex;

use diploma_core::{ContentHash, DiplomaId, Principal};

use crate::error::{IssueError, Rejected};
use crate::record::{DiplomaRecord, DiplomaUpdateRecord, IssueRequest};
use crate::registry::{CallContext, DiplomaRegistry};

/// Point-in-time view of the registry's configuration scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub diploma_count: u64,
    pub max_diplomas: u64,
    pub issuance_fee: u64,
    pub authority_contract: Option<Principal>,
}

/// Thread-safe handle to a registry.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<DiplomaRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: DiplomaRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn set_authority_contract(&self, contract: Principal) -> Result<(), Rejected> {
        self.inner.lock().set_authority_contract(contract)
    }

    pub fn set_issuance_fee(&self, fee: u64) -> Result<(), Rejected> {
        self.inner.lock().set_issuance_fee(fee)
    }

    pub fn issue_diploma(
        &self,
        ctx: &CallContext,
        request: IssueRequest,
    ) -> Result<DiplomaId, IssueError> {
        self.inner.lock().issue_diploma(ctx, request)
    }

    pub fn update_diploma(
        &self,
        ctx: &CallContext,
        id: DiplomaId,
        gpa: u32,
        honors: String,
    ) -> Result<(), Rejected> {
        self.inner.lock().update_diploma(ctx, id, gpa, honors)
    }

    /// Update a diploma and return the record as it stands after the
    /// update, both under the same lock.
    pub fn update_and_get(
        &self,
        ctx: &CallContext,
        id: DiplomaId,
        gpa: u32,
        honors: String,
    ) -> Result<DiplomaRecord, Rejected> {
        let mut registry = self.inner.lock();
        registry.update_diploma(ctx, id, gpa, honors)?;
        registry.get_diploma(id).cloned().ok_or(Rejected)
    }

    pub fn get_diploma(&self, id: DiplomaId) -> Option<DiplomaRecord> {
        self.inner.lock().get_diploma(id).cloned()
    }

    pub fn get_diploma_update(&self, id: DiplomaId) -> Option<DiplomaUpdateRecord> {
        self.inner.lock().get_diploma_update(id).cloned()
    }

    pub fn get_diploma_count(&self) -> u64 {
        self.inner.lock().get_diploma_count()
    }

    pub fn check_diploma_existence(&self, hash: &ContentHash) -> bool {
        self.inner.lock().check_diploma_existence(hash)
    }

    pub fn find_diploma_by_hash(&self, hash: &ContentHash) -> Option<DiplomaId> {
        self.inner.lock().find_diploma_by_hash(hash)
    }

    pub fn is_verified_authority(&self, principal: &Principal) -> bool {
        self.inner.lock().is_verified_authority(principal)
    }

    /// Count, capacity, fee and authority contract read under one lock.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let registry = self.inner.lock();
        RegistrySnapshot {
            diploma_count: registry.get_diploma_count(),
            max_diplomas: registry.max_diplomas(),
            issuance_fee: registry.issuance_fee(),
            authority_contract: registry.authority_contract().cloned(),
        }
    }
}
