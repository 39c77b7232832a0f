//! Query window for report requests.
//!
//! A report always covers one full calendar month. `ReportMonth` validates
//! the pair once at construction, so the rest of the pipeline can rely on
//! it naming a real month.

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

/// A validated (year, month) pair selecting the report period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            msg_bail_anyhow!(Message::InvalidMonth(month));
        }
        // Both month ends must exist in chrono's calendar range
        let next = match month {
            12 => year.checked_add(1).map(|y| (y, 1)),
            _ => Some((year, month + 1)),
        };
        let valid = NaiveDate::from_ymd_opt(year, month, 1).is_some()
            && next.is_some_and(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1).is_some());
        if !valid {
            msg_bail_anyhow!(Message::InvalidReportDate(year, month));
        }
        Ok(Self { year, month })
    }

    /// The month containing the current local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Builds the window from optional CLI arguments, falling back to the
    /// current year and month for whichever is omitted.
    pub fn from_args(year: Option<i32>, month: Option<u32>) -> Result<Self> {
        let current = Self::current();
        Self::new(year.unwrap_or(current.year), month.unwrap_or(current.month))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Validated in new(), so the unwrap cannot fire
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last day of the month, leap years included.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = match self.month {
            12 => (self.year + 1, 1),
            _ => (self.year, self.month + 1),
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap().pred_opt().unwrap()
    }

    /// Inclusive since/until range for the reporting API.
    pub fn range(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.last_day())
    }
}
