//! Reward domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::charges::CompanyCharges;
use crate::errors::ValidationError;
use crate::Result;

/// A stock grant recorded for a user. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReward {
    /// Caller-supplied unique ID; the natural idempotency key.
    pub id: String,
    pub user_id: String,
    pub stock_symbol: String,
    /// Shares granted; fractional, 6-decimal precision.
    pub quantity: Decimal,
    /// Instant the reward nominally occurred (caller-supplied).
    pub reward_timestamp: DateTime<Utc>,
    /// Price captured at posting time, immutable thereafter.
    pub price_at_reward: Decimal,
    /// Server-assigned persistence instant.
    pub created_at: DateTime<Utc>,
}

/// An inbound reward submission, before pricing and posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockReward {
    pub id: String,
    pub user_id: String,
    pub stock_symbol: String,
    pub quantity: Decimal,
    pub reward_timestamp: DateTime<Utc>,
}

impl NewStockReward {
    /// Validates the submission before any pricing or persistence happens.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::MissingField("userId".to_string()).into());
        }
        if self.stock_symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("stockSymbol".to_string()).into());
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "quantity must be strictly positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Outcome of a successful reward posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardPosting {
    pub reward: StockReward,
    /// Trade notional in INR (price x quantity), full precision.
    pub inr_value: Decimal,
    pub charges: CompanyCharges,
}
