//! Price range configuration for the simulated market.

/// Inclusive price range a symbol's simulated price is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Wide fallback range for symbols without a configured range.
pub const DEFAULT_PRICE_RANGE: PriceRange = PriceRange {
    min: 100.0,
    max: 5000.0,
};

/// Statically configured ranges for the simulated NSE symbols.
///
/// `refresh_all` only regenerates prices for these symbols; a symbol priced
/// lazily from the default range keeps its first price for the life of the
/// process.
const CONFIGURED_RANGES: &[(&str, PriceRange)] = &[
    ("RELIANCE", PriceRange { min: 2200.0, max: 2800.0 }),
    ("TCS", PriceRange { min: 3200.0, max: 4000.0 }),
    ("INFOSYS", PriceRange { min: 1400.0, max: 1800.0 }),
    ("HDFC", PriceRange { min: 1500.0, max: 2000.0 }),
    ("WIPRO", PriceRange { min: 400.0, max: 600.0 }),
    ("ITC", PriceRange { min: 380.0, max: 480.0 }),
    ("BHARTI", PriceRange { min: 800.0, max: 1200.0 }),
    ("SBIN", PriceRange { min: 500.0, max: 700.0 }),
    ("HDFCBANK", PriceRange { min: 1400.0, max: 1700.0 }),
    ("ICICIBANK", PriceRange { min: 900.0, max: 1200.0 }),
];

/// Returns the configured range for a symbol, or the wide default.
pub fn price_range_for(symbol: &str) -> PriceRange {
    CONFIGURED_RANGES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_PRICE_RANGE)
}

/// Symbols with a statically configured range.
pub fn configured_symbols() -> impl Iterator<Item = &'static str> {
    CONFIGURED_RANGES.iter().map(|(s, _)| *s)
}
