//! Budget CLI commands
//!
//! Implements `budget set` and `budget show`.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_line, format_budget_table};
use crate::error::ExpenseResult;
use crate::services::BudgetService;
use crate::storage::Store;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set monthly budget
    Set {
        /// Month (1-12) of current year
        #[arg(long, allow_negative_numbers = true)]
        month: i64,
        /// Budget amount (positive number)
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },

    /// Show budgets
    Show {
        /// Specific month (1-12) of current year
        #[arg(long, allow_negative_numbers = true)]
        month: Option<i64>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &Store,
    settings: &Settings,
    today: NaiveDate,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = BudgetService::new(store, today);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { month, amount } => {
            let (period, amount) = service.set(month, amount)?;
            println!(
                "Budget set for {}: {}",
                period,
                amount.format_with_symbol(currency)
            );
        }

        BudgetCommands::Show { month: None } => {
            let budgets = service.list()?;
            print!("{}", format_budget_table(&budgets, currency));
        }

        BudgetCommands::Show { month: Some(month) } => {
            let (period, budget) = service.get(month)?;
            print!("{}", format_budget_line(period, budget, currency));
        }
    }

    Ok(())
}
