//! Export module
//!
//! Writes filtered expenses to spreadsheet-compatible CSV files.

pub mod csv;

pub use csv::{export_expenses_csv, write_expenses_csv};
