//! Business logic layer
//!
//! Services load the document through the [`Store`](crate::storage::Store),
//! apply validation and filtering, and save when they mutate.

pub mod budget;
pub mod expense;
pub mod filter;

pub use budget::BudgetService;
pub use expense::{ExpenseService, ExpenseUpdate, NewExpense, Summary};
pub use filter::{filter_expenses, ExpenseFilter};
