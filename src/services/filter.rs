//! Query/filter engine
//!
//! Pure functions over a snapshot of the expense list. Every query rescans
//! all records; there is no index.

use chrono::{Datelike, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{month_to_year_month, Expense, YearMonth};

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Keep only this category (case-insensitive)
    pub category: Option<String>,
    /// Keep only this month
    pub month: Option<YearMonth>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from command-line style arguments
    ///
    /// The month number always refers to the year of `today`. An empty
    /// category means no category filter.
    pub fn from_args(
        category: Option<&str>,
        month: Option<i64>,
        today: NaiveDate,
    ) -> ExpenseResult<Self> {
        let mut filter = Self::new();
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            filter = filter.category(category);
        }
        if let Some(month) = month {
            filter = filter.month(month_to_year_month(month, today.year())?);
        }
        Ok(filter)
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by month
    pub fn month(mut self, month: YearMonth) -> Self {
        self.month = Some(month);
        self
    }

    /// Whether a single expense passes the filter
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if !expense.has_category(category) {
                return false;
            }
        }
        if let Some(month) = &self.month {
            if !month.contains(expense.date) {
                return false;
            }
        }
        true
    }
}

/// Select the matching expenses, ordered by (date, id)
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    let mut selected: Vec<&Expense> = expenses.iter().filter(|e| filter.matches(e)).collect();
    selected.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
    selected
}
