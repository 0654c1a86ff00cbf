//! Payslip construction.
//!
//! Turns a [`SalaryCalculation`] into the earnings and deductions rows a
//! salary-slip renderer prints.

use rust_decimal::Decimal;

use crate::config::CompanyProfile;
use crate::models::{
    AuditWarning, EmployeeDetails, Payslip, PayslipComponent, PayslipLine, SalaryCalculation,
};

use super::rounding::floor_at_zero;

/// Raised when the employee's joining date falls after the pay month.
pub const WARNING_EMPLOYEE_NOT_JOINED: &str = "EMPLOYEE_NOT_JOINED";

/// Builds a payslip for an employee from a completed calculation.
///
/// All four earning components are always listed. Professional tax is always
/// listed; the leave deduction only when there is one.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{build_payslip, calculate_monthly_salary_with_policy};
/// use salary_engine::config::{CompanyProfile, SalaryPolicy};
/// use salary_engine::models::{EmployeeDetails, MonthlySalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = MonthlySalaryInput::new(
///     Decimal::from(600_000),
///     Decimal::from(480_000),
///     2025,
///     1,
///     Decimal::ZERO,
/// );
/// let calculation = calculate_monthly_salary_with_policy(&input, &SalaryPolicy::default()).unwrap();
///
/// let company = CompanyProfile {
///     name: "Example Technologies Pvt Ltd".to_string(),
///     address: "Bengaluru".to_string(),
///     currency: "INR".to_string(),
/// };
/// let employee = EmployeeDetails {
///     id: "EMP-0042".to_string(),
///     name: "Asha Rao".to_string(),
///     designation: "Software Engineer".to_string(),
///     department: None,
///     date_of_joining: None,
/// };
///
/// let payslip = build_payslip(&employee, &company, &calculation);
/// assert_eq!(payslip.period_label, "January 2025");
/// assert_eq!(payslip.earnings.len(), 4);
/// assert_eq!(payslip.net_pay, Decimal::from(39_800));
/// ```
pub fn build_payslip(
    employee: &EmployeeDetails,
    company: &CompanyProfile,
    calculation: &SalaryCalculation,
) -> Payslip {
    let result = &calculation.result;

    let earnings = vec![
        PayslipLine::new(PayslipComponent::Basic, result.basic),
        PayslipLine::new(PayslipComponent::Hra, result.hra),
        PayslipLine::new(
            PayslipComponent::ConveyanceAllowance,
            result.conveyance_allowance,
        ),
        PayslipLine::new(PayslipComponent::OtherAllowance, result.other_allowance),
    ];

    let mut deductions = vec![PayslipLine::new(
        PayslipComponent::ProfessionalTax,
        result.pt_deduct,
    )];
    if !result.leaves_deduct_amt.is_zero() {
        deductions.push(PayslipLine::new(
            PayslipComponent::LeaveDeduction,
            result.leaves_deduct_amt,
        ));
    }

    let mut warnings = calculation.audit_trace.warnings.clone();
    if !employee.joined_by(calculation.period.last_day()) {
        warnings.push(AuditWarning::new(
            WARNING_EMPLOYEE_NOT_JOINED,
            format!(
                "{} had not joined by the end of {}",
                employee.name,
                calculation.period.label()
            ),
            "high",
        ));
    }

    Payslip {
        calculation_id: calculation.calculation_id,
        company_name: company.name.clone(),
        company_address: company.address.clone(),
        employee: employee.clone(),
        period: calculation.period,
        period_label: calculation.period.label(),
        month_days: result.month_days,
        paid_days: floor_at_zero(result.work_days),
        loss_of_pay_days: calculation.input.leaves_count.normalize(),
        gross_earnings: earnings.iter().map(|line| line.amount).sum(),
        total_deductions: deductions.iter().map(|line| line.amount).sum::<Decimal>(),
        net_pay: result.net_salary,
        earnings,
        deductions,
        warnings,
    }
}
