use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::NewLedgerEntry;
use crate::rewards::{NewStockReward, RewardPosting, StockReward};
use crate::Result;

/// Trait defining the contract for reward repository operations.
#[async_trait]
pub trait RewardRepositoryTrait: Send + Sync {
    /// Looks up a reward by its caller-supplied ID.
    fn find_reward(&self, reward_id: &str) -> Result<Option<StockReward>>;

    /// All rewards for a user, newest first.
    fn get_rewards_by_user(&self, user_id: &str) -> Result<Vec<StockReward>>;

    /// Rewards for a user with `start <= reward_timestamp < end`, newest first.
    fn get_rewards_by_user_in_window(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StockReward>>;

    /// Rewards for a user with `reward_timestamp < cutoff`.
    fn get_rewards_by_user_before(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<StockReward>>;

    /// Atomically persists the reward and its ledger rows in one
    /// transaction; either everything commits or nothing does.
    ///
    /// The reward ID's uniqueness is enforced by the storage layer; a
    /// conflicting insert must surface as
    /// `DatabaseError::UniqueViolation`.
    async fn create_reward_with_entries(
        &self,
        new_reward: NewStockReward,
        price_at_reward: Decimal,
        entries: Vec<NewLedgerEntry>,
    ) -> Result<StockReward>;
}

/// Trait defining the contract for the reward posting service.
#[async_trait]
pub trait RewardServiceTrait: Send + Sync {
    /// Records a reward exactly once: validates, prices, computes charges
    /// and posts the balanced ledger atomically.
    async fn post_reward(&self, request: NewStockReward) -> Result<RewardPosting>;

    fn get_reward(&self, reward_id: &str) -> Result<StockReward>;
}
