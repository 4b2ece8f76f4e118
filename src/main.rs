use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_budget_command, handle_delete, handle_export, handle_list, handle_summary,
    handle_update, install_interrupt_handler, AddArgs, BudgetCommands, DeleteArgs, ExportArgs,
    ListArgs, SummaryArgs, UpdateArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::log::init_logging;
use expense_tracker::storage::Store;
use expense_tracker::ExpenseResult;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Expense Tracker CLI",
    long_about = "Record expenses, track monthly budgets and export to CSV. \
                  All data lives in a single JSON file in your home directory."
)]
struct Cli {
    /// Enable verbose logging (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding data.json (default: ~/.expense_tracker)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// Update an expense
    Update(UpdateArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// List expenses
    List(ListArgs),

    /// Show total expenses
    Summary(SummaryArgs),

    /// Manage monthly budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export expenses to CSV
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    install_interrupt_handler()?;

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new().context("Failed to resolve data directory")?,
    };
    let settings = Settings::load_or_default(&paths);
    let store = Store::from_paths(&paths);
    let today = chrono::Local::now().date_naive();

    if let Err(err) = run(cli.command, &store, &settings, today) {
        if err.is_fatal() {
            tracing::error!(error = %err, "command failed");
            return Err(err.into());
        }
        println!("Error: {}", err);
    }

    Ok(())
}

fn run(cmd: Commands, store: &Store, settings: &Settings, today: NaiveDate) -> ExpenseResult<()> {
    match cmd {
        Commands::Add(args) => handle_add(store, today, args),
        Commands::Update(args) => handle_update(store, today, args),
        Commands::Delete(args) => handle_delete(store, today, args),
        Commands::List(args) => handle_list(store, settings, today, args),
        Commands::Summary(args) => handle_summary(store, settings, today, args),
        Commands::Budget(cmd) => handle_budget_command(store, settings, today, cmd),
        Commands::Export(args) => handle_export(store, today, args),
    }
}
