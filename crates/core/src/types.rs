use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Invalid event type '{0}', expected 'advance' or 'payment'")]
    InvalidEventKind(String),

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Database already exists at {}", .0.display())]
    DatabaseExists(PathBuf),

    #[error("Database does not exist at {}, please create it using `create-db` command", .0.display())]
    DatabaseMissing(PathBuf),
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
