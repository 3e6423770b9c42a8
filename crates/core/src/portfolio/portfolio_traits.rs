use super::portfolio_model::{HistoricalInr, PortfolioSummary, TodayRewards, UserStats};
use crate::Result;

/// Trait defining the contract for read-side portfolio queries.
pub trait PortfolioServiceTrait: Send + Sync {
    /// Current holdings per symbol, valued at current prices.
    fn get_portfolio(&self, user_id: &str) -> Result<PortfolioSummary>;

    /// Shares rewarded today plus the current INR value of the whole portfolio.
    fn get_stats(&self, user_id: &str) -> Result<UserStats>;

    /// Portfolio value at the close of each past day with reward activity.
    fn get_historical_inr(&self, user_id: &str) -> Result<HistoricalInr>;

    /// Rewards recorded since the start of the current UTC day.
    fn get_today_rewards(&self, user_id: &str) -> Result<TodayRewards>;
}
