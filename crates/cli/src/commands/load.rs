use std::path::Path;

use ampla_core::ledger_manager::LedgerManager;
use anyhow::{Context, Result};
use colored::*;

pub fn execute(manager: &LedgerManager, filename: &Path) -> Result<()> {
    if !filename.is_file() {
        anyhow::bail!("File '{}' does not exist", filename.display());
    }

    let result = manager
        .load_csv(filename)
        .with_context(|| format!("Failed to load events from {}", filename.display()))?;

    println!(
        "{}",
        format!(
            "Loaded {} events from {}",
            result.loaded,
            result.source.display()
        )
        .green()
    );

    Ok(())
}
