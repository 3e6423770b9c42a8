pub mod portfolio_model;
pub mod portfolio_service;
pub mod portfolio_traits;

pub use portfolio_model::{
    DailyValue, HistoricalInr, PortfolioSummary, StockHolding, TodayRewards, UserStats,
};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
