use thiserror::Error;

/// Errors for price oracle operations.
///
/// The simulated oracle falls back to a default range for unknown symbols,
/// so `PriceUnavailable` never occurs in practice, but the contract allows
/// for oracles that can fail.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("No price available for symbol '{0}'")]
    PriceUnavailable(String),
}
