//! The persisted root document
//!
//! All expenses, the budget map and the id counter live in one JSON object.
//! Every key has a serde default, so an older or hand-trimmed file loads
//! with the missing keys backfilled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpenseId};
use super::money::Money;
use super::period::YearMonth;

/// Root object of the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Next identifier to hand out; strictly greater than every id ever used
    #[serde(default = "default_next_id")]
    pub next_id: ExpenseId,

    /// Expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Monthly budget ceilings
    #[serde(default)]
    pub budgets: BTreeMap<YearMonth, Money>,
}

fn default_next_id() -> ExpenseId {
    1
}

impl Default for Document {
    fn default() -> Self {
        Self {
            next_id: default_next_id(),
            expenses: Vec::new(),
            budgets: BTreeMap::new(),
        }
    }
}

impl Document {
    /// Take the next identifier and advance the counter
    pub fn allocate_id(&mut self) -> ExpenseId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Find an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by id for in-place mutation
    pub fn get_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Raise `next_id` above the largest stored id if the file violates the
    /// counter invariant. Returns true if the counter changed.
    pub fn repair_next_id(&mut self) -> bool {
        let floor = self
            .expenses
            .iter()
            .map(|e| e.id + 1)
            .max()
            .unwrap_or(1);
        if self.next_id < floor {
            self.next_id = floor;
            true
        } else {
            false
        }
    }
}
