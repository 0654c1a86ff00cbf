//! Salary period model.
//!
//! This module contains the [`SalaryMonth`] type, a validated calendar month
//! that every monthly salary calculation is anchored to.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Returns true if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4 and either not divisible
/// by 100 or divisible by 400.
///
/// # Example
///
/// ```
/// use salary_engine::models::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A calendar month for which salary is computed.
///
/// Construction through [`SalaryMonth::new`] guarantees the month is in
/// `1..=12` and that the year is inside the supported calendar range, so
/// every accessor is infallible.
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryMonth;
///
/// let period = SalaryMonth::new(2024, 2).unwrap();
/// assert_eq!(period.days_in_month(), 29);
/// assert_eq!(period.label(), "February 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SalaryMonthParts", into = "SalaryMonthParts")]
pub struct SalaryMonth {
    start: NaiveDate,
    end: NaiveDate,
}

/// Wire representation of a [`SalaryMonth`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SalaryMonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<SalaryMonthParts> for SalaryMonth {
    type Error = EngineError;

    fn try_from(parts: SalaryMonthParts) -> Result<Self, Self::Error> {
        SalaryMonth::new(parts.year, parts.month)
    }
}

impl From<SalaryMonth> for SalaryMonthParts {
    fn from(period: SalaryMonth) -> Self {
        SalaryMonthParts {
            year: period.year(),
            month: period.month(),
        }
    }
}

impl SalaryMonth {
    /// Creates a salary month, rejecting months outside `1..=12` and years the
    /// calendar cannot represent.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::SalaryMonth;
    ///
    /// assert!(SalaryMonth::new(2025, 12).is_ok());
    /// assert!(SalaryMonth::new(2025, 13).is_err());
    /// assert!(SalaryMonth::new(2025, 0).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "month must be between 1 and 12".to_string(),
            });
        }

        let out_of_range = || EngineError::InvalidPeriod {
            year,
            month,
            message: "year is outside the supported calendar range".to_string(),
        };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let end = NaiveDate::from_ymd_opt(year, month, days_in(year, month))
            .ok_or_else(out_of_range)?;

        Ok(Self { start, end })
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// The calendar month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Number of calendar days in this month, leap-year aware.
    pub fn days_in_month(&self) -> u32 {
        self.end.day()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.end
    }

    /// Checks if a given date falls within this month (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::SalaryMonth;
    /// use chrono::NaiveDate;
    ///
    /// let period = SalaryMonth::new(2025, 1).unwrap();
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Human-readable label used on payslips, e.g. "January 2025".
    pub fn label(&self) -> String {
        self.start.format("%B %Y").to_string()
    }
}

fn days_in(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
