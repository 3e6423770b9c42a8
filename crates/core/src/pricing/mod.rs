//! Pricing module - simulated market price oracle.

mod pricing_errors;
mod pricing_model;
mod pricing_service;
mod pricing_traits;


pub use pricing_errors::PricingError;
pub use pricing_model::{configured_symbols, price_range_for, PriceRange, DEFAULT_PRICE_RANGE};
pub use pricing_service::SimulatedPriceOracle;
pub use pricing_traits::PriceOracleTrait;
