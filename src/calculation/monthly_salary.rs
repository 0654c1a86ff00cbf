//! Monthly salary calculation.
//!
//! Ties the period, daily rate, component split and deduction rules together
//! into a complete [`MonthlySalaryResult`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::SalaryPolicy;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, MonthlySalaryInput, MonthlySalaryResult,
    SalaryCalculation, SalaryMonth,
};

use super::component_split::split_components;
use super::daily_rate::calculate_daily_rate;
use super::deductions::calculate_deductions;
use super::rounding::{floor_at_zero, round_paise};

/// The version of the engine recorded on every calculation.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raised when the annual fixed pay is larger than the CTC.
pub const WARNING_FIXED_PAY_EXCEEDS_CTC: &str = "FIXED_PAY_EXCEEDS_CTC";
/// Raised when more leave is recorded than the month has days.
pub const WARNING_LEAVES_EXCEED_MONTH_DAYS: &str = "LEAVES_EXCEED_MONTH_DAYS";
/// Raised when deductions exceed the gross and the net was floored at zero.
pub const WARNING_DEDUCTIONS_EXCEED_GROSS: &str = "DEDUCTIONS_EXCEED_GROSS";

struct Breakdown {
    period: SalaryMonth,
    result: MonthlySalaryResult,
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

/// Calculates a monthly payslip breakdown with the standard salary structure.
///
/// This is a pure function: the same input always yields the same result.
/// It fails only for structurally invalid input (month outside `1..=12`,
/// negative amounts) or a leave count too large to multiply out; zero pay
/// and excess leave produce floored figures.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_monthly_salary;
/// use salary_engine::models::MonthlySalaryInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = MonthlySalaryInput::new(
///     Decimal::from(600_000),
///     Decimal::from(480_000),
///     2025,
///     2,
///     Decimal::from(2),
/// );
/// let result = calculate_monthly_salary(&input).unwrap();
///
/// assert_eq!(result.month_days, 28);
/// assert_eq!(result.per_day, Decimal::from_str("1428.57").unwrap());
/// assert_eq!(result.leaves_deduct_amt, Decimal::from_str("2857.14").unwrap());
/// assert_eq!(result.gross_salary, Decimal::from(37_143));
/// ```
pub fn calculate_monthly_salary(input: &MonthlySalaryInput) -> EngineResult<MonthlySalaryResult> {
    Ok(compute(input, &SalaryPolicy::default())?.result)
}

/// Calculates a monthly payslip breakdown under the given policy, recording
/// an audit trace of every step and any warnings for the caller to surface.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{
///     calculate_monthly_salary_with_policy, WARNING_DEDUCTIONS_EXCEED_GROSS,
/// };
/// use salary_engine::config::SalaryPolicy;
/// use salary_engine::models::MonthlySalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = MonthlySalaryInput::new(
///     Decimal::from(360_000),
///     Decimal::from(360_000),
///     2025,
///     4,
///     Decimal::from(35),
/// );
/// let calculation = calculate_monthly_salary_with_policy(&input, &SalaryPolicy::default()).unwrap();
///
/// assert_eq!(calculation.result.net_salary, Decimal::ZERO);
/// assert!(calculation.audit_trace.has_warning(WARNING_DEDUCTIONS_EXCEED_GROSS));
/// ```
pub fn calculate_monthly_salary_with_policy(
    input: &MonthlySalaryInput,
    policy: &SalaryPolicy,
) -> EngineResult<SalaryCalculation> {
    let start_time = Instant::now();
    let breakdown = compute(input, policy)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(SalaryCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        period: breakdown.period,
        input: input.clone(),
        result: breakdown.result,
        audit_trace: AuditTrace {
            steps: breakdown.steps,
            warnings: breakdown.warnings,
            duration_us,
        },
    })
}

fn compute(input: &MonthlySalaryInput, policy: &SalaryPolicy) -> EngineResult<Breakdown> {
    policy.validate()?;
    let period = input.validate()?;
    let month_days = period.days_in_month();

    let mut steps = Vec::with_capacity(5);
    let mut warnings = Vec::new();

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "salary_period".to_string(),
        rule_name: "Salary Period".to_string(),
        input: serde_json::json!({
            "year": input.year,
            "month": input.month
        }),
        output: serde_json::json!({
            "month_days": month_days,
            "first_day": period.first_day().to_string(),
            "last_day": period.last_day().to_string()
        }),
        reasoning: format!("{} has {} days", period.label(), month_days),
    });

    let variable_pay = floor_at_zero(input.ctc - input.fixed_pay);
    if input.fixed_pay > input.ctc {
        let warning = AuditWarning::new(
            WARNING_FIXED_PAY_EXCEEDS_CTC,
            format!(
                "Fixed pay ₹{} exceeds CTC ₹{}; variable pay reported as ₹0",
                input.fixed_pay.normalize(),
                input.ctc.normalize()
            ),
            "medium",
        );
        debug!(code = %warning.code, "{}", warning.message);
        warnings.push(warning);
    }
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "variable_pay".to_string(),
        rule_name: "Variable Pay".to_string(),
        input: serde_json::json!({
            "ctc": input.ctc.normalize().to_string(),
            "fixed_pay": input.fixed_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "variable_pay": variable_pay.normalize().to_string()
        }),
        reasoning: format!(
            "₹{} - ₹{} = ₹{}",
            input.ctc.normalize(),
            input.fixed_pay.normalize(),
            variable_pay.normalize()
        ),
    });

    let rate = calculate_daily_rate(input.fixed_pay, month_days, input.leaves_count, policy, 3)?;
    steps.push(rate.audit_step);

    if input.leaves_count > Decimal::from(month_days) {
        let warning = AuditWarning::new(
            WARNING_LEAVES_EXCEED_MONTH_DAYS,
            format!(
                "{} leave days recorded in a {} day month",
                input.leaves_count.normalize(),
                month_days
            ),
            "medium",
        );
        debug!(code = %warning.code, "{}", warning.message);
        warnings.push(warning);
    }

    let split = split_components(rate.effective_gross, policy, 4);
    steps.push(split.audit_step);

    let deductions = calculate_deductions(
        split.gross_salary,
        rate.per_day,
        input.leaves_count,
        input.pt_deduct,
        policy,
        5,
    )?;
    steps.push(deductions.audit_step);

    if deductions.net_floored {
        let warning = AuditWarning::new(
            WARNING_DEDUCTIONS_EXCEED_GROSS,
            format!(
                "Deductions ₹{} exceed gross salary ₹{}; net salary reported as ₹0",
                deductions.total_deduction, split.gross_salary
            ),
            "high",
        );
        debug!(code = %warning.code, "{}", warning.message);
        warnings.push(warning);
    }

    let result = MonthlySalaryResult {
        variable_pay,
        month_days,
        per_month: round_paise(rate.per_month),
        per_day: round_paise(rate.per_day),
        work_days: rate.work_days.normalize(),
        basic: split.basic,
        hra: split.hra,
        conveyance_allowance: split.conveyance_allowance,
        other_allowance: split.other_allowance,
        gross_salary: split.gross_salary,
        pt_deduct: deductions.pt_deduct,
        leaves_deduct_amt: deductions.leaves_deduct_amt,
        total_deduction: deductions.total_deduction,
        net_salary: deductions.net_salary,
    };

    Ok(Breakdown {
        period,
        result,
        steps,
        warnings,
    })
}
