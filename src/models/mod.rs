//! Core data models for the expense tracker
//!
//! This module contains the data structures persisted in the data file:
//! expenses, monthly budget keys, money amounts and the root document.

pub mod document;
pub mod expense;
pub mod money;
pub mod period;

pub use document::Document;
pub use expense::{parse_date, Expense, ExpenseId};
pub use money::{validate_amount, Money};
pub use period::{month_to_year_month, YearMonth};
