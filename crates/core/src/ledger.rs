//! Ledger replay
//!
//! Balances are never stored. They are derived by replaying every event in
//! date order through a [`LedgerCalculator`], which accrues daily interest on
//! the outstanding principal between events.

pub mod calculator;
pub mod interest;

pub use calculator::{calculate_balances, LedgerCalculator};
pub use interest::InterestAccrual;
