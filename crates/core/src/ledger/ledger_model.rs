//! Ledger domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Bookkeeping account a ledger row posts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    StockAsset,
    CashAccount,
    BrokerageExpense,
    SttExpense,
    GstExpense,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::StockAsset => "STOCK_ASSET",
            AccountType::CashAccount => "CASH_ACCOUNT",
            AccountType::BrokerageExpense => "BROKERAGE_EXPENSE",
            AccountType::SttExpense => "STT_EXPENSE",
            AccountType::GstExpense => "GST_EXPENSE",
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STOCK_ASSET" => Ok(AccountType::StockAsset),
            "CASH_ACCOUNT" => Ok(AccountType::CashAccount),
            "BROKERAGE_EXPENSE" => Ok(AccountType::BrokerageExpense),
            "STT_EXPENSE" => Ok(AccountType::SttExpense),
            "GST_EXPENSE" => Ok(AccountType::GstExpense),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown account type '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One debit or credit row in the double-entry record of a reward.
///
/// Append-only; rows are cascade-deleted with their parent reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: i32,
    pub reward_id: String,
    pub account_type: AccountType,
    pub stock_symbol: Option<String>,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal,
    pub quantity: Option<Decimal>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A ledger row to be inserted alongside its reward.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    pub account_type: AccountType,
    pub stock_symbol: Option<String>,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal,
    pub quantity: Option<Decimal>,
    pub description: String,
}
