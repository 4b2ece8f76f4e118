//! CLI command for CSV export

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::error::ExpenseResult;
use crate::export::export_expenses_csv;
use crate::services::ExpenseService;
use crate::storage::Store;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV path
    #[arg(long)]
    pub csv: PathBuf,
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,
    /// Filter by month (1-12) of current year
    #[arg(long, allow_negative_numbers = true)]
    pub month: Option<i64>,
}

/// Handle `export`; no file is written when nothing matches
pub fn handle_export(store: &Store, today: NaiveDate, args: ExportArgs) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store, today).list(args.category.as_deref(), args.month)?;

    if expenses.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }

    export_expenses_csv(&expenses, &args.csv)?;
    println!(
        "Exported {} expenses to {}",
        expenses.len(),
        args.csv.display()
    );
    Ok(())
}
