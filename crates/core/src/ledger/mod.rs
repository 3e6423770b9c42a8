//! Ledger module - double-entry bookkeeping records for rewards.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

#[cfg(test)]
mod ledger_service_tests;

pub use ledger_model::{AccountType, LedgerEntry, NewLedgerEntry};
pub use ledger_service::build_reward_entries;
pub use ledger_traits::LedgerRepositoryTrait;
