//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod budget;
pub mod expense;
pub mod table;

pub use budget::{format_budget_line, format_budget_table};
pub use expense::{format_expense_table, format_summary};
pub use table::format_table;
