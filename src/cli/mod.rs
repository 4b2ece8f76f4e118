//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod interrupt;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_delete, handle_list, handle_summary, handle_update, AddArgs, DeleteArgs,
    ListArgs, SummaryArgs, UpdateArgs,
};
pub use export::{handle_export, ExportArgs};
pub use interrupt::install_interrupt_handler;
