//! Report rendering
//!
//! The text layout is fixed-width and consumed by other tooling, so column
//! widths and labels must not change.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::events::format_date;
use crate::results::{AdvanceBalance, BalanceReport, BalanceSummary};
use crate::types::LedgerResult;

const RULE_WIDTH: usize = 58;

/// Round to cents, ties to even, always showing two decimals
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{:.2}", rounded)
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f, "Advances:")?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:>10}{:>11}{:>17}{:>20}",
            "Identifier", "Date", "Initial Amt", "Current Balance"
        )?;
        for advance in &self.advances {
            writeln!(
                f,
                "{:>10}{:>11}{:>17}{:>20}",
                advance.identifier,
                format_date(advance.date),
                format_money(advance.initial_amount),
                format_money(advance.current_balance),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Summary Statistics:")?;
        writeln!(f, "{}", rule)?;
        let summary = &self.summary;
        writeln!(
            f,
            "Aggregate Advance Balance: {:>31}",
            format_money(summary.aggregate_advance_balance)
        )?;
        writeln!(
            f,
            "Interest Payable Balance: {:>32}",
            format_money(summary.interest_payable_balance)
        )?;
        writeln!(
            f,
            "Total Interest Paid: {:>37}",
            format_money(summary.total_interest_paid)
        )?;
        writeln!(
            f,
            "Balance Applicable to Future Advances: {:>19}",
            format_money(summary.balance_for_future_advances)
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdvance {
    identifier: usize,
    event_id: i64,
    date: String,
    initial_amount: String,
    current_balance: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    aggregate_advance_balance: String,
    interest_payable_balance: String,
    total_interest_paid: String,
    balance_applicable_to_future_advances: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    end_date: String,
    advances: Vec<JsonAdvance>,
    summary: JsonSummary,
}

impl From<&AdvanceBalance> for JsonAdvance {
    fn from(advance: &AdvanceBalance) -> Self {
        Self {
            identifier: advance.identifier,
            event_id: advance.event_id,
            date: format_date(advance.date),
            initial_amount: format_money(advance.initial_amount),
            current_balance: format_money(advance.current_balance),
        }
    }
}

impl From<&BalanceSummary> for JsonSummary {
    fn from(summary: &BalanceSummary) -> Self {
        Self {
            aggregate_advance_balance: format_money(summary.aggregate_advance_balance),
            interest_payable_balance: format_money(summary.interest_payable_balance),
            total_interest_paid: format_money(summary.total_interest_paid),
            balance_applicable_to_future_advances: format_money(
                summary.balance_for_future_advances,
            ),
        }
    }
}

/// Pretty-printed JSON with amounts as two-decimal strings
pub fn render_json(report: &BalanceReport) -> LedgerResult<String> {
    let json = JsonReport {
        end_date: format_date(report.end_date),
        advances: report.advances.iter().map(JsonAdvance::from).collect(),
        summary: JsonSummary::from(&report.summary),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::parse_date;
    use rust_decimal_macros::dec;

    fn sample_report() -> BalanceReport {
        BalanceReport {
            end_date: parse_date("2021-01-20").unwrap(),
            advances: vec![AdvanceBalance {
                identifier: 1,
                event_id: 7,
                date: parse_date("2021-01-01").unwrap(),
                initial_amount: dec!(1000),
                current_balance: dec!(503.5),
            }],
            summary: BalanceSummary {
                aggregate_advance_balance: dec!(503.5),
                interest_payable_balance: dec!(1.76225),
                total_interest_paid: dec!(3.5),
                balance_for_future_advances: Decimal::ZERO,
            },
        }
    }

    #[test]
    fn test_format_money_rounds_half_to_even() {
        assert_eq!(format_money(dec!(0.035)), "0.04");
        assert_eq!(format_money(dec!(0.125)), "0.12");
        assert_eq!(format_money(dec!(0.0525)), "0.05");
        assert_eq!(format_money(dec!(1000)), "1000.00");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_text_layout() {
        let expected = "\
Advances:
----------------------------------------------------------
Identifier       Date      Initial Amt     Current Balance
         1 2021-01-01          1000.00              503.50

Summary Statistics:
----------------------------------------------------------
Aggregate Advance Balance:                          503.50
Interest Payable Balance:                             1.76
Total Interest Paid:                                  3.50
Balance Applicable to Future Advances:                0.00
";
        assert_eq!(sample_report().to_string(), expected);
    }

    #[test]
    fn test_every_line_is_rule_width() {
        let text = sample_report().to_string();
        for line in text.lines().filter(|l| !l.is_empty() && !l.ends_with(':')) {
            assert_eq!(line.len(), RULE_WIDTH, "unexpected width: {:?}", line);
        }
    }

    #[test]
    fn test_json_rendering() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["endDate"], "2021-01-20");
        assert_eq!(value["advances"][0]["identifier"], 1);
        assert_eq!(value["advances"][0]["eventId"], 7);
        assert_eq!(value["advances"][0]["currentBalance"], "503.50");
        assert_eq!(value["summary"]["interestPayableBalance"], "1.76");
        assert_eq!(value["summary"]["balanceApplicableToFutureAdvances"], "0.00");
    }
}
