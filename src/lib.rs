//! expense-tracker - personal expense tracking from the command line
//!
//! Records expenses (date, description, amount, optional category) in a
//! single local JSON document, with monthly budgets, filtered listings and
//! CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months, the document)
//! - `storage`: JSON document store with atomic writes and corruption recovery
//! - `services`: Business logic (filtering, expense CRUD, budgets)
//! - `display`: Terminal output formatting
//! - `export`: CSV export
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Store;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let paths = ExpensePaths::new()?;
//! let store = Store::from_paths(&paths);
//! let today = chrono::Local::now().date_naive();
//! let march = ExpenseService::new(&store, today).list(None, Some(3))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
