use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{LedgerError, LedgerResult};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ampla.yml";

/// Database file used when neither a flag nor the config names one
pub const DEFAULT_DATABASE_FILE: &str = "db.sqlite3";

/// Daily interest rate applied to the outstanding advance balance (0.035%)
pub fn default_interest_rate() -> Decimal {
    Decimal::new(35, 5)
}

/// A rate may be written either as a YAML number or as a quoted string.
/// Quoting keeps the exact digits; numbers go through their shortest textual form.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RateValue {
    Text(String),
    Number(serde_yaml::Number),
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LedgerConfig {
    /// Path to the SQLite database, relative to the config file
    pub database: Option<PathBuf>,
    pub interest_rate: Option<RateValue>,
}

impl LedgerConfig {
    /// Resolved daily interest rate, falling back to the default
    pub fn interest_rate(&self) -> LedgerResult<Decimal> {
        let Some(value) = &self.interest_rate else {
            return Ok(default_interest_rate());
        };

        let text = match value {
            RateValue::Text(text) => text.trim().to_string(),
            RateValue::Number(number) => number.to_string(),
        };

        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(&text)
        } else {
            Decimal::from_str(&text)
        };
        let rate = parsed
            .map_err(|e| LedgerError::Config(format!("Invalid interest rate '{}': {}", text, e)))?;
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(LedgerError::Config(format!(
                "Interest rate must not be negative, got {}",
                text
            )));
        }
        Ok(rate)
    }
}

pub fn parse_ledger_config(yaml_str: &str) -> LedgerResult<LedgerConfig> {
    if yaml_str.trim().is_empty() {
        return Ok(LedgerConfig::default());
    }
    let config: LedgerConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Read a config file, resolving a relative `database` against the file's directory
pub fn load_ledger_config(path: &Path) -> LedgerResult<LedgerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LedgerError::Config(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let mut config = parse_ledger_config(&content).map_err(|e| {
        LedgerError::Config(format!("Failed to parse config {}: {}", path.display(), e))
    })?;

    if let Some(database) = config.database.take() {
        let resolved = if database.is_relative() {
            path.parent()
                .map(|dir| dir.join(&database))
                .unwrap_or(database)
        } else {
            database
        };
        config.database = Some(resolved);
    }

    Ok(config)
}
