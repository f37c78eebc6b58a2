//! SQLite-backed event storage
//!
//! The database holds a single `events` table. Amounts are stored as decimal
//! text so values survive the round trip exactly; dates are ISO `YYYY-MM-DD`
//! strings, which sort and compare correctly as text.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OpenFlags};
use rust_decimal::Decimal;

use crate::events::{format_date, parse_date, Event, EventKind, NewEvent};
use crate::types::{LedgerError, LedgerResult};

const SCHEMA: &str = r#"
    create table events
    (
        id integer not null primary key autoincrement,
        type varchar(32) not null,
        amount text not null,
        date_created date not null,
        CHECK (type IN ('advance', 'payment'))
    );
"#;

pub struct EventStore {
    conn: Connection,
    path: PathBuf,
}

impl EventStore {
    /// Create a fresh database. Refuses to touch an existing file.
    pub fn create(path: &Path) -> LedgerResult<Self> {
        if path.exists() {
            return Err(LedgerError::DatabaseExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %path.display(), "initialized database");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open an existing database without creating it
    pub fn open(path: &Path) -> LedgerResult<Self> {
        if !path.is_file() {
            return Err(LedgerError::DatabaseMissing(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Delete the database file. Returns `false` when there was nothing to delete.
    pub fn drop_database(path: &Path) -> LedgerResult<bool> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "deleted database");
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert all events in one transaction
    pub fn insert_events(&mut self, events: &[NewEvent]) -> LedgerResult<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "insert into events (type, amount, date_created) values (?1, ?2, ?3)",
            )?;
            for event in events {
                stmt.execute(params![
                    event.kind.as_str(),
                    event.amount.to_string(),
                    format_date(event.date),
                ])?;
            }
        }
        tx.commit()?;
        Ok(events.len())
    }

    /// Events dated on or before `end_date`, oldest first; same-day events keep insertion order
    pub fn events_until(&self, end_date: NaiveDate) -> LedgerResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "select id, type, amount, date_created from events \
             where date(date_created) <= date(?1) \
             order by date_created asc, id asc",
        )?;

        let rows = stmt.query_map(params![format_date(end_date)], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut events = Vec::new();
        for row in rows {
            let (id, kind, amount, date) = row?;
            let kind = EventKind::from_str(&kind)?;
            let amount =
                Decimal::from_str(&amount).map_err(|_| LedgerError::InvalidAmount(amount.clone()))?;
            events.push(Event::new(id, kind, parse_date(&date)?, amount));
        }
        Ok(events)
    }

    pub fn count(&self) -> LedgerResult<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from events", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_event(kind: EventKind, date: &str, amount: Decimal) -> NewEvent {
        NewEvent {
            kind,
            date: parse_date(date).unwrap(),
            amount,
        }
    }

    #[test]
    fn test_create_refuses_existing_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("db.sqlite3");

        EventStore::create(&path).unwrap();
        assert!(matches!(
            EventStore::create(&path),
            Err(LedgerError::DatabaseExists(_))
        ));
    }

    #[test]
    fn test_open_missing_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.sqlite3");

        assert!(matches!(
            EventStore::open(&path),
            Err(LedgerError::DatabaseMissing(_))
        ));
        assert!(!path.exists(), "open must not create the file");
    }

    #[test]
    fn test_drop_database() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("db.sqlite3");

        assert!(!EventStore::drop_database(&path).unwrap());
        EventStore::create(&path).unwrap();
        assert!(EventStore::drop_database(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_events_until_filters_and_orders() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("db.sqlite3");
        let mut store = EventStore::create(&path).unwrap();

        store
            .insert_events(&[
                new_event(EventKind::Payment, "2021-01-03", dec!(25)),
                new_event(EventKind::Advance, "2021-01-01", dec!(100.10)),
                new_event(EventKind::Advance, "2021-01-03", dec!(50)),
                new_event(EventKind::Advance, "2021-02-01", dec!(75)),
            ])
            .unwrap();
        assert_eq!(store.count().unwrap(), 4);

        let events = store.events_until(parse_date("2021-01-31").unwrap()).unwrap();
        let summary: Vec<_> = events
            .iter()
            .map(|e| (e.kind, format_date(e.date), e.amount))
            .collect();

        assert_eq!(
            summary,
            vec![
                (EventKind::Advance, "2021-01-01".to_string(), dec!(100.10)),
                (EventKind::Payment, "2021-01-03".to_string(), dec!(25)),
                (EventKind::Advance, "2021-01-03".to_string(), dec!(50)),
            ]
        );
    }

    #[test]
    fn test_reopen_preserves_exact_amounts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("db.sqlite3");
        {
            let mut store = EventStore::create(&path).unwrap();
            store
                .insert_events(&[new_event(EventKind::Advance, "2021-01-01", dec!(0.1))])
                .unwrap();
        }

        let store = EventStore::open(&path).unwrap();
        let events = store.events_until(parse_date("2021-01-01").unwrap()).unwrap();
        assert_eq!(events[0].amount, dec!(0.1));
        assert_eq!(events[0].id, 1);
    }
}
