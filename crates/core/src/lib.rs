//! Ampla Core Library
//!
//! This is the core library for the Ampla ledger calculator. It records
//! advances and payments on a line of credit and derives balances and accrued
//! interest from them.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`ledger_manager`] - High-level interface used by the command line
//! - [`ledger`] - Event replay, payment allocation, and interest accrual
//! - [`store`] - SQLite event storage
//! - [`loader`] - CSV event import
//! - [`events`] - Event types and parsing helpers
//! - [`report`] - Fixed-width and JSON report rendering
//! - [`configs`] - Configuration file parsing
//! - [`results`] - Result types for ledger operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ampla_core::ledger_manager::{LedgerManager, LedgerManagerConfig};
//! use std::path::PathBuf;
//!
//! # fn example() -> ampla_core::types::LedgerResult<()> {
//! let config = LedgerManagerConfig::resolve(&PathBuf::from("."), None, None)?;
//! let manager = LedgerManager::new(config);
//!
//! let report = manager.balances(None)?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod events;
pub mod ledger;
pub mod ledger_manager;
pub mod loader;
pub mod report;
pub mod results;
pub mod store;
pub mod types;

// Re-export the main types for easier usage
pub use types::{LedgerError, LedgerResult};
pub use ledger_manager::{LedgerManager, LedgerManagerConfig};
