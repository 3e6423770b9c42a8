//! Database models for stock rewards.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use stockledger_core::rewards::{NewStockReward, StockReward};

/// Helper function to parse a string into a Decimal,
/// with a fallback for scientific notation by parsing as f64 first.
pub(crate) fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => match Decimal::from_f64(f_val) {
                Some(dec_val) => dec_val,
                None => {
                    log::error!(
                        "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                        field_name,
                        value_str,
                        f_val
                    );
                    Decimal::ZERO
                }
            },
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses an RFC 3339 timestamp column, falling back to the current time for
/// rows that somehow hold an unparseable value.
pub(crate) fn parse_timestamp_tolerant(value_str: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value_str) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as RFC 3339 (err: {}). Falling back to now.",
                field_name,
                value_str,
                e
            );
            Utc::now()
        }
    }
}

/// Database model for stock rewards
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::stock_rewards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StockRewardDB {
    pub id: String,
    pub user_id: String,
    pub stock_symbol: String,
    pub quantity: String,
    pub reward_timestamp: String,
    pub price_at_reward: String,
    pub created_at: String,
}

impl StockRewardDB {
    /// Builds the row to insert for a freshly accepted reward. `created_at`
    /// is stamped here so the storage layer owns the record's clock.
    pub fn from_new(
        new_reward: &NewStockReward,
        price_at_reward: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_reward.id.clone(),
            user_id: new_reward.user_id.clone(),
            stock_symbol: new_reward.stock_symbol.clone(),
            quantity: new_reward.quantity.to_string(),
            reward_timestamp: new_reward.reward_timestamp.to_rfc3339(),
            price_at_reward: price_at_reward.to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<StockRewardDB> for StockReward {
    fn from(db: StockRewardDB) -> Self {
        StockReward {
            quantity: parse_decimal_string_tolerant(&db.quantity, "quantity"),
            price_at_reward: parse_decimal_string_tolerant(&db.price_at_reward, "price_at_reward"),
            reward_timestamp: parse_timestamp_tolerant(&db.reward_timestamp, "reward_timestamp"),
            created_at: parse_timestamp_tolerant(&db.created_at, "created_at"),
            id: db.id,
            user_id: db.user_id,
            stock_symbol: db.stock_symbol,
        }
    }
}
