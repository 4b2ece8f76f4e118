//! Expense CLI commands
//!
//! Implements the add, update, delete, list and summary commands.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::models::ExpenseId;
use crate::services::{ExpenseService, ExpenseUpdate, NewExpense};
use crate::storage::Store;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense description
    #[arg(long)]
    pub description: String,
    /// Expense amount (positive number)
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
    /// Date in YYYY-MM-DD format (default: today)
    #[arg(long)]
    pub date: Option<String>,
    /// Optional category tag
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `update`
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// New amount (positive number)
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,
    /// New date in YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,
    /// New category (empty to clear)
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Expense ID
    #[arg(long)]
    pub id: ExpenseId,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,
    /// Filter by month (1-12) of current year
    #[arg(long, allow_negative_numbers = true)]
    pub month: Option<i64>,
}

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month (1-12) of current year
    #[arg(long, allow_negative_numbers = true)]
    pub month: Option<i64>,
}

/// Handle `add`
pub fn handle_add(store: &Store, today: NaiveDate, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(store, today);
    let expense = service.add(NewExpense {
        description: args.description,
        amount: args.amount,
        date: args.date,
        category: args.category,
    })?;

    println!("Expense added successfully (ID: {})", expense.id);
    Ok(())
}

/// Handle `update`
pub fn handle_update(store: &Store, today: NaiveDate, args: UpdateArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(store, today);
    service.update(
        args.id,
        ExpenseUpdate {
            description: args.description,
            amount: args.amount,
            date: args.date,
            category: args.category,
        },
    )?;

    println!("Expense updated successfully");
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(store: &Store, today: NaiveDate, args: DeleteArgs) -> ExpenseResult<()> {
    ExpenseService::new(store, today).delete(args.id)?;

    println!("Expense deleted successfully");
    Ok(())
}

/// Handle `list`
pub fn handle_list(
    store: &Store,
    settings: &Settings,
    today: NaiveDate,
    args: ListArgs,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(store, today).list(args.category.as_deref(), args.month)?;

    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `summary`
pub fn handle_summary(
    store: &Store,
    settings: &Settings,
    today: NaiveDate,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let summary = ExpenseService::new(store, today).summary(args.month)?;

    print!("{}", format_summary(&summary, &settings.currency_symbol));
    Ok(())
}
