use diesel::prelude::*;
use std::sync::Arc;

use stockledger_core::ledger::{LedgerEntry, LedgerRepositoryTrait};
use stockledger_core::Result;

use super::model::LedgerEntryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::ledger_entries;

/// Read-only repository over the ledger. Rows are inserted exclusively by
/// `RewardRepository::create_reward_with_entries`.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn get_entries_for_reward(&self, reward_id: &str) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = ledger_entries::table
            .filter(ledger_entries::reward_id.eq(reward_id))
            .select(LedgerEntryDB::as_select())
            .order(ledger_entries::id.asc())
            .load::<LedgerEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(LedgerEntryDB::into_domain).collect()
    }
}
