use std::path::PathBuf;

use ampla_core::ledger_manager::{LedgerManager, LedgerManagerConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding a tracing filter, e.g. `AMPLA_LOG=ampla_core=trace`
const LOG_ENV: &str = "AMPLA_LOG";

/// Ampla - ledger calculator for advances and payments
#[derive(Parser)]
#[command(name = "ampla")]
#[command(about = "Ampla engineering takehome ledger calculator")]
#[command(version)]
struct Cli {
    /// Debug output
    #[arg(long, global = true, overrides_with = "no_debug")]
    debug: bool,

    /// No debug output (default)
    #[arg(long, global = true, overrides_with = "debug")]
    no_debug: bool,

    /// Path to the SQLite database (defaults to ./db.sqlite3)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Path to a configuration file (defaults to ./ampla.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize sqlite3 database
    CreateDb,
    /// Delete sqlite3 database
    DropDb,
    /// Load events with data from csv file
    Load {
        /// CSV file with rows of type,date,amount
        filename: PathBuf,
    },
    /// Display balance statistics as of `end_date`
    Balances {
        /// Report date in YYYY-MM-DD format (defaults to today)
        end_date: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(debug: bool) {
    let default_directives = if debug {
        "ampla_core=debug,ampla=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if cli.debug {
        println!("[Debug mode is on]");
    }

    let working_dir = std::env::current_dir().context("Failed to read working directory")?;
    let config = LedgerManagerConfig::resolve(&working_dir, cli.db, cli.config)
        .context("Failed to load configuration")?;
    tracing::debug!(database = %config.database_path.display(), "resolved configuration");

    let manager = LedgerManager::new(config);

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::CreateDb => commands::create_db::execute(&manager),
        Commands::DropDb => commands::drop_db::execute(&manager),
        Commands::Load { filename } => commands::load::execute(&manager, &filename),
        Commands::Balances { end_date, json } => {
            commands::balances::execute(&manager, end_date.as_deref(), json)
        }
    }
}
