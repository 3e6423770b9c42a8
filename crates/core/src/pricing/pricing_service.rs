use std::collections::HashMap;
use std::sync::RwLock;

use log::info;
use rand::Rng;
use rust_decimal::Decimal;

use crate::pricing::{configured_symbols, price_range_for, PriceOracleTrait};
use crate::Result;

/// In-memory simulated price oracle.
///
/// Holds one current price per symbol. Prices are generated lazily on first
/// lookup and regenerated for configured symbols on each `refresh_all`. The
/// table is guarded by a reader/writer lock; the write lock is held only for
/// the in-memory map update, never across price generation.
pub struct SimulatedPriceOracle {
    prices: RwLock<HashMap<String, Decimal>>,
}

impl SimulatedPriceOracle {
    pub fn new() -> Self {
        Self {
            prices: RwLock::new(HashMap::new()),
        }
    }

    /// Draws a uniform-random price inside the symbol's range and truncates
    /// it to two decimals (trunc toward zero, matching the system-wide
    /// money rounding rule).
    fn generate_price(symbol: &str) -> Decimal {
        let range = price_range_for(symbol);
        let raw: f64 = rand::thread_rng().gen_range(range.min..=range.max);
        // trunc(price * 100) / 100
        Decimal::new((raw * 100.0) as i64, 2)
    }
}

impl Default for SimulatedPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceOracleTrait for SimulatedPriceOracle {
    fn get_price(&self, symbol: &str) -> Result<Decimal> {
        {
            let prices = self.prices.read().expect("price table lock poisoned");
            if let Some(price) = prices.get(symbol) {
                return Ok(*price);
            }
        }

        let price = Self::generate_price(symbol);
        let mut prices = self.prices.write().expect("price table lock poisoned");
        // Another caller may have inserted while the lock was released;
        // keep the first price so repeated reads stay identical.
        Ok(*prices.entry(symbol.to_string()).or_insert(price))
    }

    fn get_prices(&self, symbols: &[String]) -> Result<HashMap<String, Decimal>> {
        let mut prices = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            prices.insert(symbol.clone(), self.get_price(symbol)?);
        }
        Ok(prices)
    }

    fn refresh_all(&self) -> Result<()> {
        let fresh: Vec<(String, Decimal)> = configured_symbols()
            .map(|symbol| (symbol.to_string(), Self::generate_price(symbol)))
            .collect();

        let mut prices = self.prices.write().expect("price table lock poisoned");
        for (symbol, price) in fresh {
            prices.insert(symbol, price);
        }
        drop(prices);

        info!("Stock prices refreshed");
        Ok(())
    }
}
