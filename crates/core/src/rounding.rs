//! Truncating rounding helpers.
//!
//! Every money-like value in this system is rounded by truncating toward
//! zero after scaling (`trunc(value * 100) / 100` for two decimals), never
//! by round-half-up. Reporting paths re-round already-rounded inputs with
//! the same rule, so all call sites must go through these helpers to stay
//! consistent.

use rust_decimal::Decimal;

use crate::constants::{LEDGER_AMOUNT_SCALE, MONEY_SCALE, QUANTITY_SCALE};

/// Truncates a money value to 2 decimal places.
pub fn trunc2(value: Decimal) -> Decimal {
    value.trunc_with_scale(MONEY_SCALE)
}

/// Truncates a ledger amount to 4 decimal places.
pub fn trunc4(value: Decimal) -> Decimal {
    value.trunc_with_scale(LEDGER_AMOUNT_SCALE)
}

/// Truncates a share quantity to 6 decimal places.
pub fn trunc6(value: Decimal) -> Decimal {
    value.trunc_with_scale(QUANTITY_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trunc2_truncates_instead_of_rounding_half_up() {
        assert_eq!(trunc2(dec!(10.999)), dec!(10.99));
        assert_eq!(trunc2(dec!(10.991)), dec!(10.99));
        assert_eq!(trunc2(dec!(0.005)), dec!(0.00));
    }

    #[test]
    fn trunc2_leaves_shorter_values_untouched() {
        assert_eq!(trunc2(dec!(10.5)), dec!(10.5));
        assert_eq!(trunc2(dec!(42)), dec!(42));
    }

    #[test]
    fn trunc6_truncates_quantities() {
        assert_eq!(trunc6(dec!(1.2345678)), dec!(1.234567));
        assert_eq!(trunc6(dec!(0.0000019)), dec!(0.000001));
    }

    #[test]
    fn trunc4_truncates_ledger_amounts() {
        assert_eq!(trunc4(dec!(3.14159)), dec!(3.1415));
    }
}
