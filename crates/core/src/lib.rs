//! Stockledger Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the stock-reward bookkeeping
//! service. It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod charges;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod pricing;
pub mod rewards;
pub mod rounding;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
