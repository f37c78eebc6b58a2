//! Configuration parsing
//!
//! Settings are read from an optional `ampla.yml` and merged with command-line
//! overrides into a [`crate::ledger_manager::LedgerManagerConfig`].

pub mod ledger;

pub use ledger::{load_ledger_config, parse_ledger_config, LedgerConfig};
