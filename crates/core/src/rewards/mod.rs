//! Rewards module - reward posting pipeline and queries.

mod rewards_errors;
mod rewards_model;
mod rewards_service;
mod rewards_traits;


pub use rewards_errors::RewardError;
pub use rewards_model::{NewStockReward, RewardPosting, StockReward};
pub use rewards_service::RewardService;
pub use rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
