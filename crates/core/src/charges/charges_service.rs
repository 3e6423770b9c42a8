use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::charges::CompanyCharges;
use crate::rounding::trunc2;

/// Brokerage fee rate on trade notional (0.03%).
pub const BROKERAGE_RATE: Decimal = dec!(0.0003);

/// Securities Transaction Tax rate on trade notional (0.1%).
pub const STT_RATE: Decimal = dec!(0.001);

/// GST rate applied to the brokerage fee (18%).
pub const GST_RATE: Decimal = dec!(0.18);

/// Computes the transactional charges for a trade notional.
///
/// GST is computed from the pre-truncation brokerage value, and the total
/// from the pre-truncation parts; only the reported fields are truncated.
/// Truncating the parts first and summing would drift from the total.
/// Always succeeds for any finite, non-negative input; non-positive
/// notionals are guarded upstream by request validation.
pub fn calculate_charges(stock_cost: Decimal) -> CompanyCharges {
    let brokerage = stock_cost * BROKERAGE_RATE;
    let stt = stock_cost * STT_RATE;
    let gst = brokerage * GST_RATE;

    let total_cost = stock_cost + brokerage + stt + gst;

    CompanyCharges {
        stock_cost,
        brokerage: trunc2(brokerage),
        stt: trunc2(stt),
        gst: trunc2(gst),
        total_cost: trunc2(total_cost),
    }
}
