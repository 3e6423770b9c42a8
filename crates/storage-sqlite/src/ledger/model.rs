//! Database models for ledger entries.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use stockledger_core::errors::{Result, ValidationError};
use stockledger_core::ledger::{LedgerEntry, NewLedgerEntry};
use stockledger_core::rounding::{trunc4, trunc6};

use crate::rewards::model::{parse_decimal_string_tolerant, parse_timestamp_tolerant};

/// Database model for ledger entries
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerEntryDB {
    pub id: i32,
    pub reward_id: String,
    pub account_type: String,
    pub stock_symbol: Option<String>,
    pub debit_amount: String,
    pub credit_amount: String,
    pub quantity: Option<String>,
    pub description: String,
    pub created_at: String,
}

impl LedgerEntryDB {
    /// Converts the row to the domain type. Fails only if the stored account
    /// type is not one of the known ledger accounts.
    pub fn into_domain(self) -> Result<LedgerEntry> {
        let account_type = self.account_type.parse().map_err(|e: ValidationError| {
            log::error!(
                "Ledger entry {} holds unknown account type '{}'",
                self.id,
                self.account_type
            );
            e
        })?;
        Ok(LedgerEntry {
            account_type,
            debit_amount: parse_decimal_string_tolerant(&self.debit_amount, "debit_amount"),
            credit_amount: parse_decimal_string_tolerant(&self.credit_amount, "credit_amount"),
            quantity: self
                .quantity
                .as_deref()
                .map(|q| parse_decimal_string_tolerant(q, "quantity")),
            created_at: parse_timestamp_tolerant(&self.created_at, "created_at"),
            id: self.id,
            reward_id: self.reward_id,
            stock_symbol: self.stock_symbol,
            description: self.description,
        })
    }
}

/// Insertable row for a ledger entry; the ID is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_entries)]
pub struct NewLedgerEntryDB {
    pub reward_id: String,
    pub account_type: String,
    pub stock_symbol: Option<String>,
    pub debit_amount: String,
    pub credit_amount: String,
    pub quantity: Option<String>,
    pub description: String,
    pub created_at: String,
}

impl NewLedgerEntryDB {
    /// Amounts are stored at the ledger column precision: 4 decimal places
    /// for money, 6 for share quantities.
    pub fn from_new(reward_id: &str, entry: &NewLedgerEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            reward_id: reward_id.to_string(),
            account_type: entry.account_type.as_str().to_string(),
            stock_symbol: entry.stock_symbol.clone(),
            debit_amount: trunc4(entry.debit_amount).to_string(),
            credit_amount: trunc4(entry.credit_amount).to_string(),
            quantity: entry.quantity.map(|q| trunc6(q).to_string()),
            description: entry.description.clone(),
            created_at: created_at.to_rfc3339(),
        }
    }
}
