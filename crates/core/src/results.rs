//! Result types for ledger operations
//!
//! This module contains the result types returned by [`crate::LedgerManager`]
//! operations, kept apart from the code that renders them.

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Balance of a single advance as of the report date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceBalance {
    /// 1-based position among all advances, oldest first
    pub identifier: usize,
    pub event_id: i64,
    pub date: NaiveDate,
    pub initial_amount: Decimal,
    pub current_balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceSummary {
    pub aggregate_advance_balance: Decimal,
    pub interest_payable_balance: Decimal,
    pub total_interest_paid: Decimal,
    pub balance_for_future_advances: Decimal,
}

/// Outcome of replaying the ledger up to `end_date`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub end_date: NaiveDate,
    pub advances: Vec<AdvanceBalance>,
    pub summary: BalanceSummary,
}

/// Result of importing a CSV file
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub source: PathBuf,
    pub loaded: usize,
}

/// Result of creating or dropping the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    Created(PathBuf),
    AlreadyExists(PathBuf),
    Deleted(PathBuf),
    NotFound(PathBuf),
}
