//! Calculation logic for the Salary Engine.
//!
//! This module contains the monthly salary calculation and its building
//! blocks: rounding policies, monthly and daily rate derivation, the earning
//! component split, deductions, and payslip construction.

mod component_split;
mod daily_rate;
mod deductions;
mod monthly_salary;
mod payslip;
mod rounding;

pub use component_split::{split_components, ComponentSplit};
pub use daily_rate::{calculate_daily_rate, DailyRateResult};
pub use deductions::{calculate_deductions, professional_tax, DeductionResult};
pub use monthly_salary::{
    calculate_monthly_salary, calculate_monthly_salary_with_policy, ENGINE_VERSION,
    WARNING_DEDUCTIONS_EXCEED_GROSS, WARNING_FIXED_PAY_EXCEEDS_CTC,
    WARNING_LEAVES_EXCEED_MONTH_DAYS,
};
pub use payslip::{build_payslip, WARNING_EMPLOYEE_NOT_JOINED};
pub use rounding::{floor_at_zero, round_paise, round_rupee};
