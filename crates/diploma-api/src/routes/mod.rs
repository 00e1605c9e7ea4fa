//! # API Route Modules
//!
//! - `diplomas`: issuance, updates and lookups.
//! - `config`: authority contract and issuance fee.
//! - `ledger`: authority membership and the fee transfer log.
//! - `chain`: the dev block clock.

pub mod chain;
pub mod config;
pub mod diplomas;
pub mod ledger;
