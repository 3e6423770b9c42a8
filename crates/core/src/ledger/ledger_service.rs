use rust_decimal::Decimal;

use crate::charges::CompanyCharges;
use crate::ledger::{AccountType, NewLedgerEntry};
use crate::rewards::NewStockReward;

/// Builds the five balanced ledger rows recording a reward posting.
///
/// Four debits (the stock asset at full notional plus the three expense
/// charges) against a single cash credit of the total outflow.
pub fn build_reward_entries(
    reward: &NewStockReward,
    price: Decimal,
    charges: &CompanyCharges,
) -> Vec<NewLedgerEntry> {
    let symbol = reward.stock_symbol.clone();

    vec![
        NewLedgerEntry {
            account_type: AccountType::StockAsset,
            stock_symbol: Some(symbol.clone()),
            debit_amount: charges.stock_cost,
            credit_amount: Decimal::ZERO,
            quantity: Some(reward.quantity),
            description: format!(
                "Stock acquired: {:.6} shares of {} at \u{20b9}{:.2}",
                reward.quantity, symbol, price
            ),
        },
        NewLedgerEntry {
            account_type: AccountType::BrokerageExpense,
            stock_symbol: Some(symbol.clone()),
            debit_amount: charges.brokerage,
            credit_amount: Decimal::ZERO,
            quantity: None,
            description: format!("Brokerage expense for {} (0.03%)", symbol),
        },
        NewLedgerEntry {
            account_type: AccountType::SttExpense,
            stock_symbol: Some(symbol.clone()),
            debit_amount: charges.stt,
            credit_amount: Decimal::ZERO,
            quantity: None,
            description: format!("Securities Transaction Tax for {} (0.1%)", symbol),
        },
        NewLedgerEntry {
            account_type: AccountType::GstExpense,
            stock_symbol: Some(symbol.clone()),
            debit_amount: charges.gst,
            credit_amount: Decimal::ZERO,
            quantity: None,
            description: format!("GST on brokerage for {} (18%)", symbol),
        },
        NewLedgerEntry {
            account_type: AccountType::CashAccount,
            stock_symbol: Some(symbol.clone()),
            debit_amount: Decimal::ZERO,
            credit_amount: charges.total_cost,
            quantity: None,
            description: format!("Cash paid for stock purchase and fees for {}", symbol),
        },
    ]
}
