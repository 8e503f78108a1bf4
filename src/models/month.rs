//! Month key for budget and payment plans
//!
//! Plans are scoped to a calendar month; `PlanMonth` is the natural key
//! used by the storage layer. Formats as "YYYY-MM".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month identifying one budget or payment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanMonth {
    pub year: i32,
    pub month: u32,
}

impl PlanMonth {
    /// Create a month key; month must be 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Get the current month (local time)
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// First day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).expect("valid date"))
    }

    /// Last day of this month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - chrono::Duration::days(1)
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for PlanMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a month string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month (expected YYYY-MM): {}", self.0)
    }
}

impl std::error::Error for MonthParseError {}

impl FromStr for PlanMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError(s.to_string()))?;
        let year: i32 = year.parse().map_err(|_| MonthParseError(s.to_string()))?;
        let month: u32 = month.parse().map_err(|_| MonthParseError(s.to_string()))?;
        Self::new(year, month).ok_or_else(|| MonthParseError(s.to_string()))
    }
}
