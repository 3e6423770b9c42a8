use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::charges::calculate_charges;
use crate::ledger::{build_reward_entries, AccountType};
use crate::rewards::NewStockReward;

fn reward(quantity: Decimal) -> NewStockReward {
    NewStockReward {
        id: "r-1".to_string(),
        user_id: "u-1".to_string(),
        stock_symbol: "RELIANCE".to_string(),
        quantity,
        reward_timestamp: Utc::now(),
    }
}

#[test]
fn posting_builds_exactly_five_rows_in_account_order() {
    let price = dec!(2500.00);
    let charges = calculate_charges(price * dec!(10));
    let entries = build_reward_entries(&reward(dec!(10)), price, &charges);

    let accounts: Vec<AccountType> = entries.iter().map(|e| e.account_type).collect();
    assert_eq!(
        accounts,
        vec![
            AccountType::StockAsset,
            AccountType::BrokerageExpense,
            AccountType::SttExpense,
            AccountType::GstExpense,
            AccountType::CashAccount,
        ]
    );
}

#[test]
fn debits_balance_the_cash_credit() {
    // cost = 25000: brokerage 7.50, stt 25.00, gst 1.35, total 25033.85
    let price = dec!(2500.00);
    let charges = calculate_charges(price * dec!(10));
    let entries = build_reward_entries(&reward(dec!(10)), price, &charges);

    let debit_sum: Decimal = entries.iter().map(|e| e.debit_amount).sum();
    let credit_sum: Decimal = entries.iter().map(|e| e.credit_amount).sum();
    assert_eq!(debit_sum, dec!(25033.85));
    assert_eq!(debit_sum, credit_sum);
}

#[test]
fn balance_holds_for_fractional_quantities() {
    // cost = 2400.50 * 1.5 = 3600.75 exactly; see charges tests for parts
    let price = dec!(2400.50);
    let charges = calculate_charges(price * dec!(1.5));
    let entries = build_reward_entries(&reward(dec!(1.5)), price, &charges);

    let debit_sum: Decimal = entries.iter().map(|e| e.debit_amount).sum();
    let credit_sum: Decimal = entries.iter().map(|e| e.credit_amount).sum();
    assert_eq!(debit_sum, credit_sum);
}

#[test]
fn stock_asset_row_carries_quantity_and_full_notional() {
    let price = dec!(1500.00);
    let quantity = dec!(2.5);
    let charges = calculate_charges(price * quantity);
    let entries = build_reward_entries(&reward(quantity), price, &charges);

    let stock_row = &entries[0];
    assert_eq!(stock_row.quantity, Some(quantity));
    assert_eq!(stock_row.debit_amount, dec!(3750.00));
    assert_eq!(stock_row.credit_amount, Decimal::ZERO);
    assert_eq!(stock_row.stock_symbol.as_deref(), Some("RELIANCE"));
    assert!(stock_row.description.contains("2.500000 shares of RELIANCE"));
}

#[test]
fn expense_rows_carry_no_quantity() {
    let price = dec!(1500.00);
    let charges = calculate_charges(price * dec!(1));
    let entries = build_reward_entries(&reward(dec!(1)), price, &charges);

    for entry in &entries[1..] {
        assert_eq!(entry.quantity, None);
    }
}
