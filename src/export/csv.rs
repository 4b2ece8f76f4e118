//! CSV export
//!
//! Writes expenses with the fixed column order
//! `id,date,description,amount,category`. Quoting follows standard CSV rules
//! (fields containing commas, quotes or newlines are quoted).

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// One exported row; field order defines the column order
#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    id: u64,
    date: String,
    description: &'a str,
    amount: String,
    category: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: &expense.description,
            amount: expense.amount.to_plain_string(),
            category: expense.category.as_deref().unwrap_or(""),
        }
    }
}

/// Write expenses as CSV, header row first
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    // Header written explicitly so an empty slice still yields one
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["id", "date", "description", "amount", "category"])?;

    for expense in expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Export expenses to a CSV file, creating parent directories as needed
pub fn export_expenses_csv(expenses: &[Expense], path: &Path) -> ExpenseResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    write_expenses_csv(expenses, file)?;
    tracing::debug!(path = %path.display(), rows = expenses.len(), "exported csv");
    Ok(())
}
