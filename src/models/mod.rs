//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod payslip;
mod salary_input;
mod salary_month;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, MonthlySalaryResult, SalaryCalculation,
};
pub use employee::EmployeeDetails;
pub use payslip::{Payslip, PayslipComponent, PayslipLine};
pub use salary_input::{MAX_ANNUAL_AMOUNT, MonthlySalaryInput};
pub use salary_month::{is_leap_year, SalaryMonth};
