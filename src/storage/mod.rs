//! Storage layer for the expense tracker
//!
//! The whole dataset is one JSON document. Every command loads it, works on
//! the in-memory copy, and writes it back atomically if it changed. Nothing
//! is cached between invocations, and there is no locking: two concurrent
//! writers resolve as last-rename-wins.

pub mod file_io;

pub use file_io::{quarantine, read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Document;

/// Loads and saves the [`Document`]
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    backup_path: PathBuf,
}

impl Store {
    /// Create a store backed by `path`; corrupt files are moved to `<path>.bak`
    pub fn new(path: PathBuf) -> Self {
        let backup_path = path.with_extension("bak");
        Self { path, backup_path }
    }

    /// Create a store at the standard data file location
    pub fn from_paths(paths: &ExpensePaths) -> Self {
        Self {
            path: paths.data_file(),
            backup_path: paths.backup_file(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path a corrupt backing file is moved to
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Load the document
    ///
    /// A missing file gives a fresh document. A file that fails to parse is
    /// moved aside to the backup path and a fresh document is returned; only
    /// a failure to open an existing file is reported as an error.
    pub fn load(&self) -> ExpenseResult<Document> {
        let mut doc = match read_json::<Document, _>(&self.path) {
            Ok(Some(doc)) => doc,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no data file, starting empty");
                return Ok(Document::default());
            }
            Err(ExpenseError::Json(reason)) => {
                let moved = quarantine(&self.path, &self.backup_path);
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %self.backup_path.display(),
                    moved,
                    %reason,
                    "data file is corrupt, starting empty"
                );
                return Ok(Document::default());
            }
            Err(e) => return Err(e),
        };

        if doc.repair_next_id() {
            tracing::debug!(next_id = doc.next_id, "raised next_id above stored ids");
        }

        tracing::debug!(
            path = %self.path.display(),
            expenses = doc.expenses.len(),
            budgets = doc.budgets.len(),
            "loaded data file"
        );
        Ok(doc)
    }

    /// Save the document atomically, creating the directory if needed
    pub fn save(&self, doc: &Document) -> ExpenseResult<()> {
        write_json_atomic(&self.path, doc)?;
        tracing::debug!(
            path = %self.path.display(),
            expenses = doc.expenses.len(),
            "saved data file"
        );
        Ok(())
    }
}
