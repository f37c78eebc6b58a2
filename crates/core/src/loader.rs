//! CSV event import
//!
//! Input files have no header. Each row is `type,date,amount`, for example
//! `advance,2021-01-01,1000.00`.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::events::{parse_amount, parse_date, EventKind, NewEvent};
use crate::types::{LedgerError, LedgerResult};

const FIELDS_PER_ROW: usize = 3;

/// Read every event from a CSV file. A single malformed row fails the whole file.
pub fn read_events(path: &Path) -> LedgerResult<Vec<NewEvent>> {
    let file = std::fs::File::open(path)?;
    read_events_from(file)
}

pub fn read_events_from<R: Read>(reader: R) -> LedgerResult<Vec<NewEvent>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if is_blank(&record) {
            continue;
        }
        events.push(parse_record(&record, line)?);
    }

    tracing::debug!(count = events.len(), "parsed events from csv");
    Ok(events)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

fn parse_record(record: &StringRecord, line: u64) -> LedgerResult<NewEvent> {
    if record.len() < FIELDS_PER_ROW {
        return Err(LedgerError::MalformedRow {
            line,
            reason: format!(
                "expected {} fields (type,date,amount), found {}",
                FIELDS_PER_ROW,
                record.len()
            ),
        });
    }

    let malformed = |e: LedgerError| LedgerError::MalformedRow {
        line,
        reason: e.to_string(),
    };

    let kind: EventKind = record[0].parse().map_err(malformed)?;
    let date = parse_date(&record[1]).map_err(malformed)?;
    let amount = parse_amount(&record[2]).map_err(malformed)?;

    Ok(NewEvent { kind, date, amount })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reads_rows_in_file_order() {
        let input = "advance,2021-01-01,1000.00\npayment,2021-01-05,200\n";
        let events = read_events_from(input.as_bytes()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Advance);
        assert_eq!(events[0].amount, dec!(1000));
        assert_eq!(events[1].kind, EventKind::Payment);
        assert_eq!(events[1].date, parse_date("2021-01-05").unwrap());
    }

    #[test]
    fn test_whitespace_and_blank_lines_tolerated() {
        let input = " advance , 2021-01-01 , 50.5 \n\npayment,2021-01-02,10\n";
        let events = read_events_from(input.as_bytes()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].amount, dec!(50.5));
    }

    #[test]
    fn test_short_row_reports_line() {
        let input = "advance,2021-01-01,10\npayment,2021-01-02\n";
        let err = read_events_from(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LedgerError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_bad_values_rejected() {
        for input in [
            "withdrawal,2021-01-01,10\n",
            "advance,2021-13-01,10\n",
            "advance,2021-01-01,abc\n",
            "advance,2021-01-01,-10\n",
        ] {
            let err = read_events_from(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, LedgerError::MalformedRow { line: 1, .. }),
                "expected malformed row for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_events(Path::new("does-not-exist.csv")).unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
