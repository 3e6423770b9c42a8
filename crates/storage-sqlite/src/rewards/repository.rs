use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use stockledger_core::ledger::NewLedgerEntry;
use stockledger_core::rewards::{NewStockReward, RewardRepositoryTrait, StockReward};
use stockledger_core::Result;

use super::model::StockRewardDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::ledger::model::NewLedgerEntryDB;
use crate::schema::{ledger_entries, stock_rewards};
use async_trait::async_trait;

/// Repository for stock rewards. Reads go straight to the pool; the write
/// path goes through the single writer actor so the reward row and its
/// ledger entries commit in one transaction.
pub struct RewardRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RewardRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl RewardRepositoryTrait for RewardRepository {
    fn find_reward(&self, reward_id: &str) -> Result<Option<StockReward>> {
        let mut conn = get_connection(&self.pool)?;
        let row = stock_rewards::table
            .find(reward_id)
            .select(StockRewardDB::as_select())
            .first::<StockRewardDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(StockReward::from))
    }

    fn get_rewards_by_user(&self, user_id: &str) -> Result<Vec<StockReward>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stock_rewards::table
            .filter(stock_rewards::user_id.eq(user_id))
            .select(StockRewardDB::as_select())
            .order(stock_rewards::reward_timestamp.desc())
            .load::<StockRewardDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockReward::from).collect())
    }

    fn get_rewards_by_user_in_window(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StockReward>> {
        let mut conn = get_connection(&self.pool)?;
        // RFC 3339 timestamps in UTC compare correctly as text.
        let rows = stock_rewards::table
            .filter(stock_rewards::user_id.eq(user_id))
            .filter(stock_rewards::reward_timestamp.ge(start.to_rfc3339()))
            .filter(stock_rewards::reward_timestamp.lt(end.to_rfc3339()))
            .select(StockRewardDB::as_select())
            .order(stock_rewards::reward_timestamp.desc())
            .load::<StockRewardDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockReward::from).collect())
    }

    fn get_rewards_by_user_before(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<StockReward>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stock_rewards::table
            .filter(stock_rewards::user_id.eq(user_id))
            .filter(stock_rewards::reward_timestamp.lt(cutoff.to_rfc3339()))
            .select(StockRewardDB::as_select())
            .order(stock_rewards::reward_timestamp.asc())
            .load::<StockRewardDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockReward::from).collect())
    }

    async fn create_reward_with_entries(
        &self,
        new_reward: NewStockReward,
        price_at_reward: Decimal,
        entries: Vec<NewLedgerEntry>,
    ) -> Result<StockReward> {
        let created_at = Utc::now();
        let reward_row = StockRewardDB::from_new(&new_reward, price_at_reward, created_at);
        let entry_rows: Vec<NewLedgerEntryDB> = entries
            .iter()
            .map(|e| NewLedgerEntryDB::from_new(&reward_row.id, e, created_at))
            .collect();

        self.writer
            .exec(move |conn| {
                diesel::insert_into(stock_rewards::table)
                    .values(&reward_row)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                diesel::insert_into(ledger_entries::table)
                    .values(&entry_rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(StockReward::from(reward_row))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::ledger::LedgerRepository;
    use rust_decimal_macros::dec;
    use stockledger_core::charges::calculate_charges;
    use stockledger_core::errors::{DatabaseError, Error};
    use stockledger_core::ledger::{build_reward_entries, LedgerRepositoryTrait};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Arc<DbPool>, WriteHandle) {
        let dir = TempDir::new().unwrap();
        let db_path = dir
            .path()
            .join("test.db")
            .to_str()
            .unwrap()
            .to_string();
        db::init(&db_path).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        let writer = db::spawn_writer((*pool).clone());
        (dir, pool, writer)
    }

    fn sample_reward(id: &str, user_id: &str) -> NewStockReward {
        NewStockReward {
            id: id.to_string(),
            user_id: user_id.to_string(),
            stock_symbol: "RELIANCE".to_string(),
            quantity: dec!(10),
            reward_timestamp: Utc::now(),
        }
    }

    fn posting_entries(reward: &NewStockReward, price: Decimal) -> Vec<NewLedgerEntry> {
        let charges = calculate_charges(price * reward.quantity);
        build_reward_entries(reward, price, &charges)
    }

    #[tokio::test]
    async fn create_persists_reward_and_balanced_ledger() {
        let (_dir, pool, writer) = setup();
        let repo = RewardRepository::new(pool.clone(), writer);
        let ledger_repo = LedgerRepository::new(pool);

        let new_reward = sample_reward("r-1", "user-1");
        let price = dec!(2500.00);
        let entries = posting_entries(&new_reward, price);

        let stored = repo
            .create_reward_with_entries(new_reward, price, entries)
            .await
            .unwrap();
        assert_eq!(stored.quantity, dec!(10));
        assert_eq!(stored.price_at_reward, dec!(2500.00));

        let rows = ledger_repo.get_entries_for_reward("r-1").unwrap();
        assert_eq!(rows.len(), 5);
        let debits: Decimal = rows.iter().map(|e| e.debit_amount).sum();
        let credits: Decimal = rows.iter().map(|e| e.credit_amount).sum();
        assert_eq!(debits, credits);
    }

    #[tokio::test]
    async fn duplicate_id_surfaces_unique_violation() {
        let (_dir, pool, writer) = setup();
        let repo = RewardRepository::new(pool, writer);

        let price = dec!(1000.00);
        let first = sample_reward("r-1", "user-1");
        let entries = posting_entries(&first, price);
        repo.create_reward_with_entries(first, price, entries)
            .await
            .unwrap();

        let second = sample_reward("r-1", "user-2");
        let entries = posting_entries(&second, price);
        let err = repo
            .create_reward_with_entries(second, price, entries)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }

    #[tokio::test]
    async fn failed_insert_leaves_no_partial_rows() {
        let (_dir, pool, writer) = setup();
        let repo = RewardRepository::new(pool.clone(), writer);
        let ledger_repo = LedgerRepository::new(pool);

        let price = dec!(1000.00);
        let first = sample_reward("r-1", "user-1");
        let entries = posting_entries(&first, price);
        repo.create_reward_with_entries(first, price, entries)
            .await
            .unwrap();

        let duplicate = sample_reward("r-1", "user-1");
        let entries = posting_entries(&duplicate, price);
        let before = ledger_repo.get_entries_for_reward("r-1").unwrap().len();
        let _ = repo
            .create_reward_with_entries(duplicate, price, entries)
            .await;
        let after = ledger_repo.get_entries_for_reward("r-1").unwrap().len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn window_queries_are_half_open_and_newest_first() {
        let (_dir, pool, writer) = setup();
        let repo = RewardRepository::new(pool, writer);

        let base = Utc::now();
        let price = dec!(500.00);
        for (id, offset) in [("r-1", 0i64), ("r-2", 60), ("r-3", 120)] {
            let mut reward = sample_reward(id, "user-1");
            reward.reward_timestamp = base + chrono::Duration::seconds(offset);
            let entries = posting_entries(&reward, price);
            repo.create_reward_with_entries(reward, price, entries)
                .await
                .unwrap();
        }

        let window = repo
            .get_rewards_by_user_in_window(
                "user-1",
                base,
                base + chrono::Duration::seconds(120),
            )
            .unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].id, "r-2");
        assert_eq!(window[1].id, "r-1");

        let before = repo
            .get_rewards_by_user_before("user-1", base + chrono::Duration::seconds(61))
            .unwrap();
        assert_eq!(before.len(), 2);
        assert_eq!(before[0].id, "r-1");
    }

    #[tokio::test]
    async fn concurrent_distinct_posts_both_commit_fully() {
        let (_dir, pool, writer) = setup();
        let repo = Arc::new(RewardRepository::new(pool.clone(), writer));
        let ledger_repo = LedgerRepository::new(pool);

        let price = dec!(1000.00);
        let mut handles = Vec::new();
        for (id, user) in [("r-1", "user-1"), ("r-2", "user-2")] {
            let repo = Arc::clone(&repo);
            let reward = sample_reward(id, user);
            let entries = posting_entries(&reward, price);
            handles.push(tokio::spawn(async move {
                repo.create_reward_with_entries(reward, price, entries).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        for id in ["r-1", "r-2"] {
            assert!(repo.find_reward(id).unwrap().is_some());
            assert_eq!(ledger_repo.get_entries_for_reward(id).unwrap().len(), 5);
        }
    }

    #[tokio::test]
    async fn deleting_a_reward_cascades_to_its_entries() {
        let (_dir, pool, writer) = setup();
        let repo = RewardRepository::new(pool.clone(), writer);
        let ledger_repo = LedgerRepository::new(pool.clone());

        let price = dec!(1000.00);
        let reward = sample_reward("r-1", "user-1");
        let entries = posting_entries(&reward, price);
        repo.create_reward_with_entries(reward, price, entries)
            .await
            .unwrap();

        let mut conn = get_connection(&pool).unwrap();
        diesel::delete(stock_rewards::table.find("r-1"))
            .execute(&mut conn)
            .unwrap();

        assert!(repo.find_reward("r-1").unwrap().is_none());
        assert!(ledger_repo.get_entries_for_reward("r-1").unwrap().is_empty());
    }
}
