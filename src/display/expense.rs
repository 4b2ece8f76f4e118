//! Expense display formatting
//!
//! Formats expense lists and spending summaries for terminal display.

use crate::models::Expense;
use crate::services::Summary;

use super::table::format_table;

/// Format a list of expenses as an aligned table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.format("%Y-%m-%d").to_string(),
                e.description.clone(),
                e.amount.format_with_symbol(currency),
                e.category_label().to_string(),
            ]
        })
        .collect();

    format_table(&["ID", "Date", "Description", "Amount", "Category"], &rows)
}

/// Format the spending total, plus a warning line when over budget
pub fn format_summary(summary: &Summary, currency: &str) -> String {
    let total = summary.total.format_with_symbol(currency);
    let mut output = match &summary.period {
        Some(period) => format!("Total expenses for {}: {}\n", period.month_name(), total),
        None => format!("Total expenses: {}\n", total),
    };

    if let (Some(period), Some(budget)) = (&summary.period, summary.budget) {
        if summary.is_over_budget() {
            output.push_str(&format!(
                "Warning: over budget for {}! Budget {}, spent {}\n",
                period,
                budget.format_with_symbol(currency),
                total
            ));
        }
    }

    output
}
