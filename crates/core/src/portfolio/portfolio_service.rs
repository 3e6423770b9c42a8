use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;

use super::portfolio_model::{
    DailyValue, HistoricalInr, PortfolioSummary, StockHolding, TodayRewards, UserStats,
};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::pricing::PriceOracleTrait;
use crate::rewards::{RewardRepositoryTrait, StockReward};
use crate::rounding::{trunc2, trunc6};
use crate::Result;

/// Derives portfolio views from the reward log and the price oracle.
/// Holds no state of its own; every call re-reads both.
pub struct PortfolioService {
    reward_repository: Arc<dyn RewardRepositoryTrait>,
    price_oracle: Arc<dyn PriceOracleTrait>,
}

impl PortfolioService {
    pub fn new(
        reward_repository: Arc<dyn RewardRepositoryTrait>,
        price_oracle: Arc<dyn PriceOracleTrait>,
    ) -> Self {
        Self {
            reward_repository,
            price_oracle,
        }
    }

    fn start_of_today() -> DateTime<Utc> {
        Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
    }

    fn quantities_by_symbol(rewards: &[StockReward]) -> BTreeMap<String, Decimal> {
        let mut by_symbol: BTreeMap<String, Decimal> = BTreeMap::new();
        for reward in rewards {
            *by_symbol.entry(reward.stock_symbol.clone()).or_default() += reward.quantity;
        }
        by_symbol
    }

    /// Untruncated INR value of the given positions at current prices.
    fn value_positions(&self, by_symbol: &BTreeMap<String, Decimal>) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for (symbol, quantity) in by_symbol {
            total += *quantity * self.price_oracle.get_price(symbol)?;
        }
        Ok(total)
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary> {
        let rewards = self.reward_repository.get_rewards_by_user(user_id)?;
        let by_symbol = Self::quantities_by_symbol(&rewards);

        let mut holdings = Vec::with_capacity(by_symbol.len());
        let mut total = Decimal::ZERO;
        for (symbol, quantity) in by_symbol {
            let price = self.price_oracle.get_price(&symbol)?;
            let value = quantity * price;
            total += value;
            holdings.push(StockHolding {
                stock_symbol: symbol,
                total_quantity: trunc6(quantity),
                current_price: trunc2(price),
                current_value: trunc2(value),
            });
        }

        Ok(PortfolioSummary {
            user_id: user_id.to_string(),
            holdings,
            total_value_inr: trunc2(total),
            last_updated: Utc::now(),
        })
    }

    fn get_stats(&self, user_id: &str) -> Result<UserStats> {
        let start = Self::start_of_today();
        let end = start + Duration::days(1);
        let todays = self
            .reward_repository
            .get_rewards_by_user_in_window(user_id, start, end)?;

        // A reward stamped exactly at midnight belongs to the previous day's
        // totals, so only strictly-later rewards count.
        let mut shares_rewarded_today: BTreeMap<String, Decimal> = BTreeMap::new();
        for reward in todays.iter().filter(|r| r.reward_timestamp > start) {
            *shares_rewarded_today
                .entry(reward.stock_symbol.clone())
                .or_default() += reward.quantity;
        }
        for quantity in shares_rewarded_today.values_mut() {
            *quantity = trunc6(*quantity);
        }

        let all_rewards = self.reward_repository.get_rewards_by_user(user_id)?;
        let total = self.value_positions(&Self::quantities_by_symbol(&all_rewards))?;
        let total_shares: Decimal = all_rewards.iter().map(|r| r.quantity).sum();

        Ok(UserStats {
            user_id: user_id.to_string(),
            shares_rewarded_today,
            current_portfolio_value_inr: trunc2(total),
            total_shares_rewarded: trunc6(total_shares),
        })
    }

    fn get_historical_inr(&self, user_id: &str) -> Result<HistoricalInr> {
        let cutoff = Self::start_of_today();
        let rewards = self
            .reward_repository
            .get_rewards_by_user_before(user_id, cutoff)?;

        let mut by_day: BTreeMap<chrono::NaiveDate, Vec<&StockReward>> = BTreeMap::new();
        for reward in &rewards {
            by_day
                .entry(reward.reward_timestamp.date_naive())
                .or_default()
                .push(reward);
        }

        // Each day's value covers only the rewards granted that day, at
        // today's prices.
        let mut price_cache: HashMap<String, Decimal> = HashMap::new();
        let mut history = Vec::with_capacity(by_day.len());
        for (date, day_rewards) in by_day {
            let mut total = Decimal::ZERO;
            for reward in day_rewards {
                let price = match price_cache.get(&reward.stock_symbol) {
                    Some(price) => *price,
                    None => {
                        let price = self.price_oracle.get_price(&reward.stock_symbol)?;
                        price_cache.insert(reward.stock_symbol.clone(), price);
                        price
                    }
                };
                total += reward.quantity * price;
            }
            history.push(DailyValue {
                date,
                total_value_inr: trunc2(total),
            });
        }

        Ok(HistoricalInr {
            user_id: user_id.to_string(),
            history,
        })
    }

    fn get_today_rewards(&self, user_id: &str) -> Result<TodayRewards> {
        let start = Self::start_of_today();
        let end = start + Duration::days(1);
        let rewards = self
            .reward_repository
            .get_rewards_by_user_in_window(user_id, start, end)?;

        Ok(TodayRewards {
            user_id: user_id.to_string(),
            date: start.date_naive(),
            count: rewards.len(),
            rewards,
        })
    }
}
