//! Expense model
//!
//! An expense is one recorded purchase: a date, a description, a positive
//! amount and an optional category tag.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Identifier of an expense, assigned from the document's counter
pub type ExpenseId = u64;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused
    pub id: ExpenseId,

    /// Date of the expense (`YYYY-MM-DD` on disk)
    pub date: NaiveDate,

    /// Non-empty, trimmed description
    pub description: String,

    /// Positive amount
    pub amount: Money,

    /// Optional category tag; `None` means uncategorized
    #[serde(default)]
    pub category: Option<String>,
}

impl Expense {
    /// Whether the expense's category equals `category`, ignoring case
    ///
    /// An uncategorized expense never matches.
    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }

    /// Category for display, "-" when uncategorized
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("-")
    }
}

/// Parse a `YYYY-MM-DD` date; an empty or absent value means `today`
///
/// Only the exact fixed-width form is accepted, so a parsed date always
/// renders back to the string it came from.
pub fn parse_date(raw: Option<&str>, today: NaiveDate) -> ExpenseResult<NaiveDate> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(today),
    };

    let invalid = || ExpenseError::InvalidInput("Invalid date format. Use YYYY-MM-DD.".into());

    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

/// Trim a description, rejecting blank input
pub fn normalize_description(raw: &str) -> ExpenseResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExpenseError::InvalidInput(
            "Description must not be empty.".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim a category; blank input means uncategorized
pub fn normalize_category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
