use ampla_core::ledger_manager::LedgerManager;
use ampla_core::results::DatabaseStatus;
use anyhow::Result;
use colored::*;

pub fn execute(manager: &LedgerManager) -> Result<()> {
    let status = manager
        .drop_database()
        .map_err(|e| anyhow::anyhow!("Failed to delete database: {}", e))?;

    match status {
        DatabaseStatus::Deleted(path) => println!(
            "{}",
            format!("Deleted SQLite database at {}", path.display()).green()
        ),
        DatabaseStatus::NotFound(path) => println!(
            "{}",
            format!("SQLite database does not exist at {}", path.display()).yellow()
        ),
        DatabaseStatus::Created(_) | DatabaseStatus::AlreadyExists(_) => {}
    }

    Ok(())
}
