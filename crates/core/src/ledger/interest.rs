//! Simple daily interest accrual

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{LedgerError, LedgerResult};

/// Tracks the last date interest was charged up to
#[derive(Debug, Clone)]
pub struct InterestAccrual {
    daily_rate: Decimal,
    last_date: Option<NaiveDate>,
}

impl InterestAccrual {
    pub fn new(daily_rate: Decimal) -> Self {
        Self {
            daily_rate,
            last_date: None,
        }
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.last_date
    }

    /// Interest owed on `balance` for the days between the previous accrual and `date`.
    ///
    /// The first call only records the starting date. A date earlier than the
    /// previous one accrues nothing and does not move the clock back.
    pub fn accrue(&mut self, balance: Decimal, date: NaiveDate) -> LedgerResult<Decimal> {
        let Some(last_date) = self.last_date else {
            self.last_date = Some(date);
            return Ok(Decimal::ZERO);
        };

        let days = (date - last_date).num_days();
        if days <= 0 {
            return Ok(Decimal::ZERO);
        }

        let interest = balance
            .checked_mul(self.daily_rate)
            .and_then(|daily| daily.checked_mul(Decimal::from(days)))
            .ok_or(LedgerError::Overflow("accrued interest"))?;
        self.last_date = Some(date);
        Ok(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::parse_date;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_accrual_starts_the_clock() {
        let mut accrual = InterestAccrual::new(dec!(0.00035));
        let interest = accrual.accrue(dec!(1000), parse_date("2021-01-01").unwrap()).unwrap();

        assert_eq!(interest, Decimal::ZERO);
        assert_eq!(accrual.last_date(), Some(parse_date("2021-01-01").unwrap()));
    }

    #[test]
    fn test_accrues_per_day() {
        let mut accrual = InterestAccrual::new(dec!(0.00035));
        accrual.accrue(Decimal::ZERO, parse_date("2021-01-01").unwrap()).unwrap();

        let interest = accrual.accrue(dec!(1000), parse_date("2021-01-11").unwrap()).unwrap();
        assert_eq!(interest, dec!(3.5));
    }

    #[test]
    fn test_earlier_date_accrues_nothing() {
        let mut accrual = InterestAccrual::new(dec!(0.00035));
        accrual.accrue(Decimal::ZERO, parse_date("2021-01-10").unwrap()).unwrap();

        let interest = accrual.accrue(dec!(1000), parse_date("2021-01-05").unwrap()).unwrap();
        assert_eq!(interest, Decimal::ZERO);
        assert_eq!(accrual.last_date(), Some(parse_date("2021-01-10").unwrap()));
    }

    #[test]
    fn test_overflowing_interest_is_an_error() {
        let mut accrual = InterestAccrual::new(dec!(100000000000000000000000));
        accrual.accrue(Decimal::ZERO, parse_date("2021-01-01").unwrap()).unwrap();

        let result = accrual.accrue(dec!(1000000000), parse_date("2021-01-02").unwrap());
        assert!(matches!(result, Err(LedgerError::Overflow(_))));
        // The clock only moves on success
        assert_eq!(accrual.last_date(), Some(parse_date("2021-01-01").unwrap()));
    }
}
