//! Balance calculation
//!
//! Payments are applied in a fixed order:
//! 1. accrued interest,
//! 2. outstanding advances, oldest first,
//! 3. whatever is left is held as credit and applied to the next advances.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::events::{Event, EventKind};
use crate::ledger::interest::InterestAccrual;
use crate::results::{AdvanceBalance, BalanceReport, BalanceSummary};
use crate::types::{LedgerError, LedgerResult};

/// Replays events and tracks running balances
#[derive(Debug)]
pub struct LedgerCalculator {
    end_date: NaiveDate,
    accrual: InterestAccrual,
    advances: Vec<AdvanceBalance>,
    advance_balance: Decimal,
    interest_payable: Decimal,
    interest_paid: Decimal,
    future_credit: Decimal,
}

/// Replay `events` (already sorted by date) and produce the report as of `end_date`
pub fn calculate_balances<'a, I>(
    events: I,
    end_date: NaiveDate,
    daily_rate: Decimal,
) -> LedgerResult<BalanceReport>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut calculator = LedgerCalculator::new(end_date, daily_rate);
    for event in events {
        calculator.apply(event)?;
    }
    calculator.finish()
}

impl LedgerCalculator {
    pub fn new(end_date: NaiveDate, daily_rate: Decimal) -> Self {
        Self {
            end_date,
            accrual: InterestAccrual::new(daily_rate),
            advances: Vec::new(),
            advance_balance: Decimal::ZERO,
            interest_payable: Decimal::ZERO,
            interest_paid: Decimal::ZERO,
            future_credit: Decimal::ZERO,
        }
    }

    /// Apply one event. Events dated after the end date are skipped.
    pub fn apply(&mut self, event: &Event) -> LedgerResult<()> {
        if event.date > self.end_date {
            tracing::debug!(id = event.id, date = %event.date, "skipping event after end date");
            return Ok(());
        }

        self.accrue_until(event.date)?;
        match event.kind {
            EventKind::Advance => self.apply_advance(event)?,
            EventKind::Payment => self.apply_payment(event.amount)?,
        }

        tracing::debug!(
            id = event.id,
            kind = %event.kind,
            date = %event.date,
            amount = %event.amount,
            advance_balance = %self.advance_balance,
            interest_payable = %self.interest_payable,
            future_credit = %self.future_credit,
            "applied event"
        );
        Ok(())
    }

    /// Accrue interest through the end date (inclusive) and build the report
    pub fn finish(mut self) -> LedgerResult<BalanceReport> {
        let day_after_end = self
            .end_date
            .succ_opt()
            .ok_or_else(|| LedgerError::InvalidDate(self.end_date.to_string()))?;
        self.accrue_until(day_after_end)?;

        Ok(BalanceReport {
            end_date: self.end_date,
            advances: self.advances,
            summary: BalanceSummary {
                aggregate_advance_balance: self.advance_balance,
                interest_payable_balance: self.interest_payable,
                total_interest_paid: self.interest_paid,
                balance_for_future_advances: self.future_credit,
            },
        })
    }

    fn accrue_until(&mut self, date: NaiveDate) -> LedgerResult<()> {
        let interest = self.accrual.accrue(self.advance_balance, date)?;
        self.interest_payable = add(self.interest_payable, interest, "interest payable")?;
        Ok(())
    }

    fn apply_advance(&mut self, event: &Event) -> LedgerResult<()> {
        let (balance, credit) = offset(event.amount, self.future_credit);
        self.future_credit = credit;

        self.advances.push(AdvanceBalance {
            identifier: self.advances.len() + 1,
            event_id: event.id,
            date: event.date,
            initial_amount: event.amount,
            current_balance: balance,
        });
        self.advance_balance = add(self.advance_balance, balance, "advance balance")?;
        Ok(())
    }

    fn apply_payment(&mut self, amount: Decimal) -> LedgerResult<()> {
        let mut remaining = amount;

        if !self.interest_payable.is_zero() {
            remaining = self.pay_interest(remaining)?;
            if remaining.is_zero() {
                return Ok(());
            }
        }

        if !self.advance_balance.is_zero() {
            remaining = self.pay_advances(remaining)?;
            if remaining.is_zero() {
                return Ok(());
            }
        }

        self.future_credit = add(self.future_credit, remaining, "future advance credit")?;
        Ok(())
    }

    fn pay_interest(&mut self, amount: Decimal) -> LedgerResult<Decimal> {
        let (payable, remaining) = offset(self.interest_payable, amount);
        let paid = self.interest_payable - payable;
        self.interest_paid = add(self.interest_paid, paid, "interest paid")?;
        self.interest_payable = payable;
        Ok(remaining)
    }

    fn pay_advances(&mut self, amount: Decimal) -> LedgerResult<Decimal> {
        let mut remaining = amount;
        for advance in &mut self.advances {
            if remaining.is_zero() {
                break;
            }
            if advance.current_balance.is_zero() {
                continue;
            }
            let (balance, left) = offset(advance.current_balance, remaining);
            advance.current_balance = balance;
            remaining = left;
        }

        self.advance_balance = self
            .advance_balance
            .checked_sub(amount - remaining)
            .ok_or(LedgerError::Overflow("advance balance"))?;
        Ok(remaining)
    }
}

fn add(left: Decimal, right: Decimal, what: &'static str) -> LedgerResult<Decimal> {
    left.checked_add(right).ok_or(LedgerError::Overflow(what))
}

/// Subtract the smaller amount from the larger, keeping argument order.
/// One side of the result is always zero.
fn offset(first: Decimal, second: Decimal) -> (Decimal, Decimal) {
    if first < second {
        (Decimal::ZERO, second - first)
    } else {
        (first - second, Decimal::ZERO)
    }
}
