use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::charges::calculate_charges;
use crate::errors::DatabaseError;
use crate::ledger::build_reward_entries;
use crate::pricing::PriceOracleTrait;
use crate::rewards::{
    NewStockReward, RewardError, RewardPosting, RewardRepositoryTrait, RewardServiceTrait,
    StockReward,
};
use crate::{Error, Result};

/// Service for posting rewards and their double-entry ledger records.
pub struct RewardService {
    reward_repository: Arc<dyn RewardRepositoryTrait>,
    price_oracle: Arc<dyn PriceOracleTrait>,
}

impl RewardService {
    pub fn new(
        reward_repository: Arc<dyn RewardRepositoryTrait>,
        price_oracle: Arc<dyn PriceOracleTrait>,
    ) -> Self {
        Self {
            reward_repository,
            price_oracle,
        }
    }
}

#[async_trait]
impl RewardServiceTrait for RewardService {
    async fn post_reward(&self, request: NewStockReward) -> Result<RewardPosting> {
        request.validate()?;

        // Fast-path duplicate check for a clean error message. The storage
        // primary key remains the authoritative guard under concurrency.
        if self.reward_repository.find_reward(&request.id)?.is_some() {
            warn!("Duplicate reward ID '{}'", request.id);
            return Err(RewardError::DuplicateReward(request.id).into());
        }

        let price = self.price_oracle.get_price(&request.stock_symbol)?;
        let stock_cost = price * request.quantity;
        let charges = calculate_charges(stock_cost);
        let entries = build_reward_entries(&request, price, &charges);

        let reward_id = request.id.clone();
        let reward = self
            .reward_repository
            .create_reward_with_entries(request, price, entries)
            .await
            .map_err(|e| match e {
                // Lost the race against a concurrent post of the same ID.
                Error::Database(DatabaseError::UniqueViolation(_)) => {
                    RewardError::DuplicateReward(reward_id.clone()).into()
                }
                other => other,
            })?;

        info!(
            "Reward '{}' recorded for user '{}': {} x {} = INR {}, total cost {}",
            reward.id,
            reward.user_id,
            reward.quantity,
            reward.stock_symbol,
            stock_cost,
            charges.total_cost
        );

        Ok(RewardPosting {
            reward,
            inr_value: stock_cost,
            charges,
        })
    }

    fn get_reward(&self, reward_id: &str) -> Result<StockReward> {
        self.reward_repository
            .find_reward(reward_id)?
            .ok_or_else(|| RewardError::NotFound(reward_id.to_string()).into())
    }
}
