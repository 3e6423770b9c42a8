use crate::ledger::LedgerEntry;
use crate::Result;

/// Trait defining the contract for ledger entry queries.
///
/// Ledger rows are written only as part of the atomic reward posting
/// transaction (see `RewardRepositoryTrait::create_reward_with_entries`),
/// so this trait is read-only.
pub trait LedgerRepositoryTrait: Send + Sync {
    fn get_entries_for_reward(&self, reward_id: &str) -> Result<Vec<LedgerEntry>>;
}
