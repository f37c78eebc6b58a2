use ampla_core::events::parse_date;
use ampla_core::ledger_manager::LedgerManager;
use ampla_core::report::render_json;
use anyhow::{Context, Result};

pub fn execute(manager: &LedgerManager, end_date: Option<&str>, json: bool) -> Result<()> {
    let end_date = end_date
        .map(parse_date)
        .transpose()
        .context("Invalid end date")?;

    let report = manager
        .balances(end_date)
        .context("Failed to calculate balances")?;

    // The text layout is consumed by other tools, so it is printed uncolored
    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}
