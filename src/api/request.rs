//! Request types for the Salary Engine API.
//!
//! `/calculate` takes a bare [`MonthlySalaryInput`]; `/payslip` wraps it with
//! the employee details printed on the slip.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeDetails, MonthlySalaryInput};

/// Request body for the `/payslip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee the slip is for.
    pub employee: EmployeeDetails,
    /// The salary inputs for the month.
    pub salary: MonthlySalaryInput,
}
