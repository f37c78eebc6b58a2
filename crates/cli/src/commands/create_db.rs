use ampla_core::ledger_manager::LedgerManager;
use ampla_core::results::DatabaseStatus;
use anyhow::Result;
use colored::*;

pub fn execute(manager: &LedgerManager) -> Result<()> {
    let status = manager
        .create_database()
        .map_err(|e| anyhow::anyhow!("Failed to create database: {}", e))?;

    match status {
        DatabaseStatus::AlreadyExists(_) => println!("{}", "Database already exists".yellow()),
        DatabaseStatus::Created(path) => println!(
            "{}",
            format!("Initialized database at {}", path.display()).green()
        ),
        DatabaseStatus::Deleted(_) | DatabaseStatus::NotFound(_) => {}
    }

    Ok(())
}
