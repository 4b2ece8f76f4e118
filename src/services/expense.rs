//! Expense service
//!
//! Business logic for expense records: add, update, delete, list and the
//! monthly summary. Each operation loads the document, validates all input
//! before touching it, and saves only if something changed.

use chrono::{Datelike, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::expense::{normalize_category, normalize_description};
use crate::models::{
    month_to_year_month, parse_date, validate_amount, Expense, ExpenseId, Money, YearMonth,
};
use crate::storage::Store;

use super::filter::{filter_expenses, ExpenseFilter};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    /// `YYYY-MM-DD`; absent or empty means today
    pub date: Option<String>,
    pub category: Option<String>,
}

/// Partial update: only the `Some` fields are applied
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    /// An empty string clears the category
    pub category: Option<String>,
}

/// Total spending, optionally for one month, with that month's budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub period: Option<YearMonth>,
    pub total: Money,
    pub budget: Option<Money>,
}

impl Summary {
    /// Whether spending exceeds the month's budget
    pub fn is_over_budget(&self) -> bool {
        self.budget.is_some_and(|budget| self.total > budget)
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a Store,
    today: NaiveDate,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service; `today` anchors default dates and months
    pub fn new(store: &'a Store, today: NaiveDate) -> Self {
        Self { store, today }
    }

    /// Record a new expense
    pub fn add(&self, input: NewExpense) -> ExpenseResult<Expense> {
        let mut doc = self.store.load()?;

        let date = parse_date(input.date.as_deref(), self.today)?;
        let description = normalize_description(&input.description)?;
        let amount = validate_amount(input.amount)?;
        let category = input.category.as_deref().and_then(normalize_category);

        let expense = Expense {
            id: doc.allocate_id(),
            date,
            description,
            amount,
            category,
        };
        doc.expenses.push(expense.clone());
        self.store.save(&doc)?;

        tracing::debug!(id = expense.id, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Apply a partial update to an existing expense
    ///
    /// An unknown id is a `NotFound` error and nothing is written.
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> ExpenseResult<Expense> {
        let mut doc = self.store.load()?;

        if doc.get(id).is_none() {
            return Err(ExpenseError::expense_not_found(id));
        }

        let description = update
            .description
            .as_deref()
            .map(normalize_description)
            .transpose()?;
        let amount = update.amount.map(validate_amount).transpose()?;
        let date = update
            .date
            .as_deref()
            .map(|d| parse_date(Some(d), self.today))
            .transpose()?;
        let category = update.category.as_deref().map(normalize_category);

        let expense = doc
            .get_mut(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        if let Some(description) = description {
            expense.description = description;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(date) = date {
            expense.date = date;
        }
        if let Some(category) = category {
            expense.category = category;
        }
        let updated = expense.clone();

        self.store.save(&doc)?;
        tracing::debug!(id, "updated expense");
        Ok(updated)
    }

    /// Remove an expense; the id is never handed out again
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let mut doc = self.store.load()?;

        let index = doc
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        let removed = doc.expenses.remove(index);

        self.store.save(&doc)?;
        tracing::debug!(id, "deleted expense");
        Ok(removed)
    }

    /// Expenses matching an optional category and month, ordered by (date, id)
    pub fn list(&self, category: Option<&str>, month: Option<i64>) -> ExpenseResult<Vec<Expense>> {
        let filter = ExpenseFilter::from_args(category, month, self.today)?;
        let doc = self.store.load()?;
        Ok(filter_expenses(&doc.expenses, &filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Total spending, for one month of the current year if `month` is given
    pub fn summary(&self, month: Option<i64>) -> ExpenseResult<Summary> {
        let period = month
            .map(|m| month_to_year_month(m, self.today.year()))
            .transpose()?;
        let doc = self.store.load()?;

        let filter = ExpenseFilter {
            category: None,
            month: period,
        };
        let total = filter_expenses(&doc.expenses, &filter)
            .iter()
            .map(|e| e.amount)
            .sum();
        let budget = period.and_then(|p| doc.budgets.get(&p).copied());

        Ok(Summary {
            period,
            total,
            budget,
        })
    }
}
