//! Budget service
//!
//! One spending ceiling per calendar month of the current year. Setting a
//! budget for a month that already has one overwrites it.

use chrono::{Datelike, NaiveDate};

use crate::error::ExpenseResult;
use crate::models::{month_to_year_month, validate_amount, Money, YearMonth};
use crate::storage::Store;

/// Service for monthly budgets
pub struct BudgetService<'a> {
    store: &'a Store,
    today: NaiveDate,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service; `today` supplies the year for month numbers
    pub fn new(store: &'a Store, today: NaiveDate) -> Self {
        Self { store, today }
    }

    fn period(&self, month: i64) -> ExpenseResult<YearMonth> {
        month_to_year_month(month, self.today.year())
    }

    /// Set (or replace) the budget for a month
    pub fn set(&self, month: i64, amount: f64) -> ExpenseResult<(YearMonth, Money)> {
        let period = self.period(month)?;
        let amount = validate_amount(amount)?;

        let mut doc = self.store.load()?;
        let previous = doc.budgets.insert(period, amount);
        self.store.save(&doc)?;

        tracing::debug!(%period, %amount, replaced = previous.is_some(), "set budget");
        Ok((period, amount))
    }

    /// The budget for one month, if set
    pub fn get(&self, month: i64) -> ExpenseResult<(YearMonth, Option<Money>)> {
        let period = self.period(month)?;
        let doc = self.store.load()?;
        Ok((period, doc.budgets.get(&period).copied()))
    }

    /// All budgets in chronological order
    pub fn list(&self) -> ExpenseResult<Vec<(YearMonth, Money)>> {
        let doc = self.store.load()?;
        Ok(doc.budgets.into_iter().collect())
    }
}
