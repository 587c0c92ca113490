use chrono::{Datelike, NaiveDate};

use crate::error::{LedgerError, Result};

/// A calendar month, the key of both the ledger file name and the
/// monthly totals table. Format: "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::Validation(format!(
                "month {month} is out of range"
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse "YYYY-MM". A full "YYYY-MM-DD" date is also accepted and
    /// truncated to its month.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .map_err(|_| {
                LedgerError::Validation(format!("expected a month in YYYY-MM form, got '{s}'"))
            })?;
        Self::new(date.year(), date.month())
    }

    /// Number of months since year 0, handy as a chart axis coordinate.
    pub fn ordinal(&self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    pub fn from_ordinal(ordinal: i32) -> Self {
        Self {
            year: ordinal.div_euclid(12),
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for Month {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
