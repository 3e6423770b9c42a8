use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown of the company-side cost of acquiring a rewarded position.
///
/// Transient value object: derived at posting time, returned to the caller
/// and reflected in the ledger, never persisted directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCharges {
    /// Trade notional (price x quantity), full precision as given.
    pub stock_cost: Decimal,
    /// Brokerage fee, truncated to 2 decimals.
    pub brokerage: Decimal,
    /// Securities Transaction Tax, truncated to 2 decimals.
    pub stt: Decimal,
    /// GST on brokerage, truncated to 2 decimals.
    pub gst: Decimal,
    /// Total cash outflow, truncated to 2 decimals.
    pub total_cost: Decimal,
}
