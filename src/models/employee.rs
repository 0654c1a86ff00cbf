//! Employee model.
//!
//! The employee record itself lives in the HR database; this module only
//! carries the details a payslip prints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee details printed on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Employee code (e.g., "EMP-0042").
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Department, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Date the employee joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
}

impl EmployeeDetails {
    /// Returns true if the employee had joined by the given date.
    ///
    /// Employees without a recorded joining date are treated as employed.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::EmployeeDetails;
    /// use chrono::NaiveDate;
    ///
    /// let employee = EmployeeDetails {
    ///     id: "EMP-0042".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     designation: "Software Engineer".to_string(),
    ///     department: None,
    ///     date_of_joining: NaiveDate::from_ymd_opt(2025, 3, 10),
    /// };
    /// assert!(employee.joined_by(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
    /// assert!(!employee.joined_by(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
    /// ```
    pub fn joined_by(&self, date: NaiveDate) -> bool {
        self.date_of_joining.is_none_or(|joined| joined <= date)
    }
}
