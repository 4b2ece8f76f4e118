//! Calendar month periods
//!
//! Budgets are keyed by a `YearMonth`, rendered as the canonical `YYYY-MM`
//! string. The derived ordering (year, then month) matches the lexicographic
//! order of the rendered keys.

use chrono::{Datelike, Month, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// One calendar month of one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a period, validating the month number
    pub fn new(year: i32, month: u32) -> ExpenseResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(month_out_of_range());
        }
        if !(0..=9999).contains(&year) {
            return Err(ExpenseError::InvalidInput(format!(
                "Year must have four digits, got {}.",
                year
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name ("January")
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Resolve a month number (1-12) against `year`
///
/// Month numbers come straight from the command line, so anything outside
/// 1-12 (including negatives) is an input error rather than a parse error.
pub fn month_to_year_month(month: i64, year: i32) -> ExpenseResult<YearMonth> {
    let month = u32::try_from(month).map_err(|_| month_out_of_range())?;
    YearMonth::new(year, month)
}

/// English name of a month number; "Unknown" outside 1-12
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

fn month_out_of_range() -> ExpenseError {
    ExpenseError::InvalidInput("Month must be between 1 and 12.".into())
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ExpenseError::InvalidInput(format!("Invalid month key '{}'. Use YYYY-MM.", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(YearMonth::new(2024, 3).unwrap().to_string(), "2024-03");
        assert_eq!(YearMonth::new(987, 11).unwrap().to_string(), "0987-11");
    }

    #[test]
    fn test_month_to_year_month() {
        let ym = month_to_year_month(5, 2024).unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 5);

        for bad in [0, 13, -1, i64::MAX] {
            let err = month_to_year_month(bad, 2024).unwrap_err();
            assert_eq!(err.to_string(), "Month must be between 1 and 12.");
        }
    }

    #[test]
    fn test_parse_key() {
        let ym: YearMonth = "2025-12".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2025, 12).unwrap());

        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-1".parse::<YearMonth>().is_err());
        assert!("25-01".parse::<YearMonth>().is_err());
        assert!("2025/01".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            YearMonth::new(2024, 11).unwrap(),
            YearMonth::new(2023, 12).unwrap(),
            YearMonth::new(2024, 2).unwrap(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, ["2023-12", "2024-02", "2024-11"]);
    }

    #[test]
    fn test_contains() {
        let march = YearMonth::new(2024, 3).unwrap();
        assert!(march.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!march.contains(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().month_name(), "January");
        assert_eq!(month_name(9), "September");
        assert_eq!(month_name(0), "Unknown");
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2024, 5).unwrap();
        assert_eq!(serde_json::to_string(&ym).unwrap(), "\"2024-05\"");
        let back: YearMonth = serde_json::from_str("\"2024-05\"").unwrap();
        assert_eq!(back, ym);
    }
}
