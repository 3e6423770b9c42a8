//! SQLite storage implementation for Stockledger.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stockledger-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for rewards and ledger entries
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything above it is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod ledger;
pub mod rewards;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from stockledger-core for convenience
pub use stockledger_core::errors::{DatabaseError, Error, Result};
