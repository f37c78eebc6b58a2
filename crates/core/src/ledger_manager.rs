//! High-level ledger interface
//!
//! This module provides the [`LedgerManager`] which serves as the primary
//! interface for everything the command line can do: creating and dropping the
//! database, importing events, and computing balances.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ampla_core::ledger_manager::{LedgerManager, LedgerManagerConfig};
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> ampla_core::types::LedgerResult<()> {
//! let manager = LedgerManager::new(LedgerManagerConfig::with_database(PathBuf::from("db.sqlite3")));
//!
//! manager.create_database()?;
//! manager.load_csv(Path::new("events.csv"))?;
//! let report = manager.balances(None)?;
//! print!("{}", report);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::configs::ledger::{
    default_interest_rate, load_ledger_config, LedgerConfig, CONFIG_FILE_NAME,
    DEFAULT_DATABASE_FILE,
};
use crate::ledger::calculate_balances;
use crate::loader::read_events;
use crate::results::{BalanceReport, DatabaseStatus, LoadResult};
use crate::store::EventStore;
use crate::types::{LedgerError, LedgerResult};

/// Configuration for initializing a ledger manager
#[derive(Debug, Clone)]
pub struct LedgerManagerConfig {
    pub database_path: PathBuf,
    pub daily_interest_rate: Decimal,
}

impl LedgerManagerConfig {
    pub fn with_database(database_path: PathBuf) -> Self {
        Self {
            database_path,
            daily_interest_rate: default_interest_rate(),
        }
    }

    /// Merge command-line overrides with the config file.
    ///
    /// The database path comes from `database_override`, then the config file,
    /// then `<working_dir>/db.sqlite3`. Without an explicit `config_path`,
    /// `<working_dir>/ampla.yml` is used when it exists.
    pub fn resolve(
        working_dir: &Path,
        database_override: Option<PathBuf>,
        config_path: Option<PathBuf>,
    ) -> LedgerResult<Self> {
        let config = match config_path {
            Some(path) => load_ledger_config(&path)?,
            None => {
                let default_path = working_dir.join(CONFIG_FILE_NAME);
                if default_path.is_file() {
                    load_ledger_config(&default_path)?
                } else {
                    LedgerConfig::default()
                }
            }
        };

        let database_path = database_override
            .or_else(|| config.database.clone())
            .unwrap_or_else(|| working_dir.join(DEFAULT_DATABASE_FILE));
        let database_path = if database_path.is_relative() {
            working_dir.join(database_path)
        } else {
            database_path
        };

        Ok(Self {
            database_path,
            daily_interest_rate: config.interest_rate()?,
        })
    }
}

/// High-level ledger manager that encapsulates all ledger operations
pub struct LedgerManager {
    config: LedgerManagerConfig,
}

impl LedgerManager {
    pub fn new(config: LedgerManagerConfig) -> Self {
        Self { config }
    }

    pub fn database_path(&self) -> &Path {
        &self.config.database_path
    }

    /// Create the database; an existing one is left untouched
    pub fn create_database(&self) -> LedgerResult<DatabaseStatus> {
        match EventStore::create(self.database_path()) {
            Ok(store) => Ok(DatabaseStatus::Created(store.path().to_path_buf())),
            Err(LedgerError::DatabaseExists(path)) => Ok(DatabaseStatus::AlreadyExists(path)),
            Err(e) => Err(e),
        }
    }

    pub fn drop_database(&self) -> LedgerResult<DatabaseStatus> {
        let path = self.database_path().to_path_buf();
        if EventStore::drop_database(&path)? {
            Ok(DatabaseStatus::Deleted(path))
        } else {
            Ok(DatabaseStatus::NotFound(path))
        }
    }

    /// Import a CSV file. Nothing is written if any row is invalid.
    pub fn load_csv(&self, source: &Path) -> LedgerResult<LoadResult> {
        let mut store = EventStore::open(self.database_path())?;
        let events = read_events(source)?;
        let loaded = store.insert_events(&events)?;

        tracing::info!(
            source = %source.display(),
            loaded,
            total = store.count()?,
            "loaded events"
        );

        Ok(LoadResult {
            source: source.to_path_buf(),
            loaded,
        })
    }

    /// Balances as of `end_date` (inclusive), defaulting to today
    pub fn balances(&self, end_date: Option<NaiveDate>) -> LedgerResult<BalanceReport> {
        let end_date = end_date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let store = EventStore::open(self.database_path())?;
        let events = store.events_until(end_date)?;

        tracing::debug!(
            end_date = %end_date,
            events = events.len(),
            rate = %self.config.daily_interest_rate,
            "calculating balances"
        );

        calculate_balances(&events, end_date, self.config.daily_interest_rate)
    }
}
