//! # Block Heights
//!
//! The registry has no wall clock. "Now" is the current block height of
//! the ledger it is hosted on, supplied per call by the host. Issuance
//! dates and expiries are expressed in the same unit.
//!
//! `BlockClock` is the host-side source of that value. `ManualClock` is an
//! in-process implementation whose height only moves forward when the host
//! advances it; the development server and the tests use it.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A ledger block height.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// The genesis height.
    pub const GENESIS: BlockHeight = BlockHeight(0);

    /// Access the inner integer.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Height `blocks` after this one, saturating at `u64::MAX`.
    pub fn advanced_by(self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl std::fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source of the current block height.
pub trait BlockClock: Send + Sync {
    /// The current block height. Never decreases between calls.
    fn block_height(&self) -> BlockHeight;
}

/// A monotonic clock advanced explicitly by its owner.
#[derive(Debug, Default)]
pub struct ManualClock {
    height: AtomicU64,
}

impl ManualClock {
    /// Create a clock starting at `start`.
    pub fn starting_at(start: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(start.0),
        }
    }

    /// Advance the clock by `blocks` and return the new height.
    pub fn advance(&self, blocks: u64) -> BlockHeight {
        let prev = self
            .height
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |h| {
                Some(h.saturating_add(blocks))
            })
            .unwrap_or_else(|h| h);
        BlockHeight(prev).advanced_by(blocks)
    }
}

impl BlockClock for ManualClock {
    fn block_height(&self) -> BlockHeight {
        BlockHeight(self.height.load(Ordering::SeqCst))
    }
}
