//! Read-side views derived from recorded rewards and current prices.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rewards::StockReward;

/// Aggregated position in a single symbol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub stock_symbol: String,
    /// Total shares held, truncated to 6 decimal places.
    pub total_quantity: Decimal,
    /// Current simulated price per share in INR, truncated to 2 decimal places.
    pub current_price: Decimal,
    /// Quantity times price, truncated to 2 decimal places.
    pub current_value: Decimal,
}

/// A user's full portfolio valued at current prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub user_id: String,
    /// Holdings sorted by symbol.
    pub holdings: Vec<StockHolding>,
    pub total_value_inr: Decimal,
    pub last_updated: DateTime<Utc>,
}

/// Per-user activity statistics for the current UTC day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_id: String,
    /// Shares rewarded since the start of the current UTC day, keyed by symbol.
    pub shares_rewarded_today: BTreeMap<String, Decimal>,
    /// Value of the user's entire portfolio at current prices.
    pub current_portfolio_value_inr: Decimal,
    /// Total shares ever rewarded to the user across all symbols,
    /// truncated to 6 decimal places.
    pub total_shares_rewarded: Decimal,
}

/// Portfolio value at the close of one past UTC day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyValue {
    pub date: NaiveDate,
    pub total_value_inr: Decimal,
}

/// Day-by-day portfolio values for all days before today, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalInr {
    pub user_id: String,
    pub history: Vec<DailyValue>,
}

/// Rewards recorded for a user during the current UTC day, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayRewards {
    pub user_id: String,
    pub date: NaiveDate,
    pub count: usize,
    pub rewards: Vec<StockReward>,
}
