//! Budget display formatting

use crate::models::{Money, YearMonth};

use super::table::format_table;

/// Format all budgets as a `Month  Budget` table
pub fn format_budget_table(budgets: &[(YearMonth, Money)], currency: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows: Vec<Vec<String>> = budgets
        .iter()
        .map(|(period, amount)| vec![period.to_string(), amount.format_with_symbol(currency)])
        .collect();

    format_table(&["Month", "Budget"], &rows)
}

/// Format a single month's budget
pub fn format_budget_line(period: YearMonth, budget: Option<Money>, currency: &str) -> String {
    match budget {
        Some(amount) => format!(
            "Budget for {}: {}\n",
            period,
            amount.format_with_symbol(currency)
        ),
        None => format!("No budget set for {}.\n", period),
    }
}
