//! SQLite storage implementation for stock rewards.

pub(crate) mod model;
mod repository;

pub use model::StockRewardDB;
pub use repository::RewardRepository;
