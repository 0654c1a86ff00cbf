//! Monthly and daily rate calculation.
//!
//! Spreads the annual fixed pay over the pay months, derives the daily rate
//! for the calendar month, and pro-rates the month for unpaid leave.

use rust_decimal::Decimal;

use crate::config::SalaryPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::round_paise;

/// The result of pro-rating a month's fixed pay.
///
/// All amounts are unrounded; rounding happens once, where each figure is
/// reported.
#[derive(Debug, Clone)]
pub struct DailyRateResult {
    /// Annual fixed pay divided by the pay months in a year.
    pub per_month: Decimal,
    /// `per_month` divided by the calendar days in the month.
    pub per_day: Decimal,
    /// Calendar days minus leave. Negative when leave exceeds the month.
    pub work_days: Decimal,
    /// `per_day * leaves_count`.
    pub leave_amount: Decimal,
    /// `per_month - leave_amount`. Negative when leave exceeds the month.
    pub effective_gross: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives the monthly and daily rates and the leave-adjusted monthly gross.
///
/// # Arguments
///
/// * `fixed_pay` - Annual fixed pay
/// * `month_days` - Calendar days in the pay month (28 to 31)
/// * `leaves_count` - Unpaid leave days taken in the month
/// * `policy` - Salary policy supplying the pay months per year
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the leave amount does not
/// fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_daily_rate;
/// use salary_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let result = calculate_daily_rate(
///     Decimal::from(480_000),
///     28,
///     Decimal::from(2),
///     &SalaryPolicy::default(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.per_month, Decimal::from(40_000));
/// assert_eq!(result.work_days, Decimal::from(26));
/// assert_eq!(result.effective_gross.round_dp(2).to_string(), "37142.86");
/// ```
pub fn calculate_daily_rate(
    fixed_pay: Decimal,
    month_days: u32,
    leaves_count: Decimal,
    policy: &SalaryPolicy,
    step_number: u32,
) -> EngineResult<DailyRateResult> {
    let month_days_dec = Decimal::from(month_days);

    let per_month = fixed_pay / Decimal::from(policy.months_per_year);
    let per_day = per_month / month_days_dec;
    let work_days = month_days_dec - leaves_count;
    let leave_amount = per_day
        .checked_mul(leaves_count)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "leave amount overflows for {} leave days at ₹{} per day",
                leaves_count.normalize(),
                round_paise(per_day)
            ),
        })?;
    let effective_gross = per_month - leave_amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Monthly and Daily Rate".to_string(),
        input: serde_json::json!({
            "fixed_pay": fixed_pay.normalize().to_string(),
            "months_per_year": policy.months_per_year,
            "month_days": month_days,
            "leaves_count": leaves_count.normalize().to_string()
        }),
        output: serde_json::json!({
            "per_month": round_paise(per_month).to_string(),
            "per_day": round_paise(per_day).to_string(),
            "work_days": work_days.normalize().to_string(),
            "effective_gross": round_paise(effective_gross).to_string()
        }),
        reasoning: format!(
            "₹{} / {} months = ₹{} per month; / {} days = ₹{} per day; {} payable days = ₹{}",
            fixed_pay.normalize(),
            policy.months_per_year,
            round_paise(per_month),
            month_days,
            round_paise(per_day),
            work_days.normalize(),
            round_paise(effective_gross)
        ),
    };

    Ok(DailyRateResult {
        per_month,
        per_day,
        work_days,
        leave_amount,
        effective_gross,
        audit_step,
    })
}
