use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::Result;

/// Trait defining the contract for the current-price oracle.
pub trait PriceOracleTrait: Send + Sync {
    /// Returns the current price for a symbol.
    ///
    /// Never fails for an unknown symbol: a price is generated from a wide
    /// default range on first lookup and cached until the next refresh.
    fn get_price(&self, symbol: &str) -> Result<Decimal>;

    /// Resolves each symbol independently via [`get_price`](Self::get_price).
    /// An empty input yields an empty map.
    fn get_prices(&self, symbols: &[String]) -> Result<HashMap<String, Decimal>>;

    /// Regenerates a fresh price for every statically configured symbol.
    /// Symbols priced lazily from the default range are not refreshed.
    fn refresh_all(&self) -> Result<()>;
}
