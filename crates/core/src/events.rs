//! Ledger events
//!
//! Every change to a customer's line of credit is an event: either an advance
//! (principal drawn) or a payment. Events carry the date they happened on and a
//! non-negative amount.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{LedgerError, LedgerResult};

/// Date format used in CSV input, storage, and reports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Advance,
    Payment,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Advance => "advance",
            EventKind::Payment => "payment",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "advance" => Ok(EventKind::Advance),
            "payment" => Ok(EventKind::Payment),
            other => Err(LedgerError::InvalidEventKind(other.to_string())),
        }
    }
}

/// An event that has not been written to the store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// A stored event; `id` reflects insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Event {
    pub fn new(id: i64, kind: EventKind, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            id,
            kind,
            date,
            amount,
        }
    }
}

pub fn parse_date(text: &str) -> LedgerResult<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a money amount. Negative amounts are rejected.
pub fn parse_amount(text: &str) -> LedgerResult<Decimal> {
    let trimmed = text.trim();
    let amount =
        Decimal::from_str(trimmed).map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::InvalidAmount(trimmed.to_string()));
    }
    Ok(amount.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_kind_parsing() {
        assert_eq!("advance".parse::<EventKind>().unwrap(), EventKind::Advance);
        assert_eq!(" payment ".parse::<EventKind>().unwrap(), EventKind::Payment);
        assert!(matches!(
            "refund".parse::<EventKind>(),
            Err(LedgerError::InvalidEventKind(kind)) if kind == "refund"
        ));
        // Storage is case-sensitive, so input is too
        assert!("Advance".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2021-02-28").unwrap();
        assert_eq!(format_date(date), "2021-02-28");
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("02/28/2021").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000.00").unwrap(), dec!(1000));
        assert_eq!(parse_amount(" 12.345 ").unwrap(), dec!(12.345));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("ten").is_err());
    }
}
