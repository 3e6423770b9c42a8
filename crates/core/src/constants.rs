//! Application-wide constants.
//!
//! All monetary values in the system are Indian Rupees.

/// Decimal places for money-like values (prices, charges, portfolio values).
pub const MONEY_SCALE: u32 = 2;

/// Decimal places for ledger debit/credit amounts.
pub const LEDGER_AMOUNT_SCALE: u32 = 4;

/// Decimal places for share quantities (fractional shares allowed).
pub const QUANTITY_SCALE: u32 = 6;
