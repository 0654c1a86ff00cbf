//! Deductions and net salary.
//!
//! Applies professional tax and the unpaid-leave deduction to the gross
//! salary and floors the net pay at zero.

use rust_decimal::Decimal;

use crate::config::SalaryPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::rounding::{floor_at_zero, round_paise};

/// The deductions applied to a month's gross salary.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// Professional tax.
    pub pt_deduct: Decimal,
    /// Unpaid-leave deduction, rounded to paise.
    pub leaves_deduct_amt: Decimal,
    /// `pt_deduct + leaves_deduct_amt`.
    pub total_deduction: Decimal,
    /// `gross_salary - total_deduction`, floored at zero.
    pub net_salary: Decimal,
    /// True when deductions exceeded gross and the net was floored.
    pub net_floored: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Resolves the professional tax for the month.
///
/// No tax is charged on a month with no earnings. Otherwise a caller override
/// wins when present and non-zero, and the policy default applies.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::professional_tax;
/// use salary_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = SalaryPolicy::default();
/// let gross = Decimal::from(40_000);
///
/// assert_eq!(professional_tax(gross, None, &policy), Decimal::from(200));
/// assert_eq!(professional_tax(gross, Some(Decimal::ZERO), &policy), Decimal::from(200));
/// assert_eq!(professional_tax(gross, Some(Decimal::from(175)), &policy), Decimal::from(175));
/// assert_eq!(professional_tax(Decimal::ZERO, None, &policy), Decimal::ZERO);
/// ```
pub fn professional_tax(
    gross_salary: Decimal,
    pt_override: Option<Decimal>,
    policy: &SalaryPolicy,
) -> Decimal {
    if gross_salary.is_zero() {
        return Decimal::ZERO;
    }
    match pt_override {
        Some(pt) if !pt.is_zero() => pt,
        _ => policy.professional_tax,
    }
}

/// Calculates the month's deductions and net salary.
///
/// # Arguments
///
/// * `gross_salary` - Gross salary recomposed from the earning components
/// * `per_day` - Unrounded daily rate
/// * `leaves_count` - Unpaid leave days
/// * `pt_override` - Caller-supplied professional tax, if any
/// * `policy` - Salary policy supplying the default professional tax
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the leave deduction or the
/// deduction total does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_deductions;
/// use salary_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(
///     Decimal::from(40_000),
///     Decimal::from(40_000) / Decimal::from(31),
///     Decimal::ZERO,
///     None,
///     &SalaryPolicy::default(),
///     4,
/// )
/// .unwrap();
/// assert_eq!(result.total_deduction, Decimal::from(200));
/// assert_eq!(result.net_salary, Decimal::from(39_800));
/// assert!(!result.net_floored);
/// ```
pub fn calculate_deductions(
    gross_salary: Decimal,
    per_day: Decimal,
    leaves_count: Decimal,
    pt_override: Option<Decimal>,
    policy: &SalaryPolicy,
    step_number: u32,
) -> EngineResult<DeductionResult> {
    let overflow = |what: &str| EngineError::CalculationError {
        message: format!(
            "{} overflows for {} leave days at ₹{} per day",
            what,
            leaves_count.normalize(),
            round_paise(per_day)
        ),
    };

    let pt_deduct = professional_tax(gross_salary, pt_override, policy);
    let leaves_deduct_amt = round_paise(
        per_day
            .checked_mul(leaves_count)
            .ok_or_else(|| overflow("leave deduction"))?,
    );
    let total_deduction = pt_deduct
        .checked_add(leaves_deduct_amt)
        .ok_or_else(|| overflow("total deduction"))?;

    let unfloored_net = gross_salary - total_deduction;
    let net_salary = floor_at_zero(unfloored_net);
    let net_floored = unfloored_net < Decimal::ZERO;

    let audit_step = AuditStep {
        step_number,
        rule_id: "deductions".to_string(),
        rule_name: "Deductions and Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "per_day": round_paise(per_day).to_string(),
            "leaves_count": leaves_count.normalize().to_string(),
            "pt_override": pt_override.map(|pt| pt.normalize().to_string())
        }),
        output: serde_json::json!({
            "pt_deduct": pt_deduct.normalize().to_string(),
            "leaves_deduct_amt": leaves_deduct_amt.to_string(),
            "total_deduction": total_deduction.to_string(),
            "net_salary": net_salary.to_string(),
            "net_floored": net_floored
        }),
        reasoning: format!(
            "₹{} - (PT ₹{} + leave ₹{}) = ₹{}{}",
            gross_salary,
            pt_deduct.normalize(),
            leaves_deduct_amt,
            round_paise(unfloored_net),
            if net_floored { ", floored to ₹0" } else { "" }
        ),
    };

    Ok(DeductionResult {
        pt_deduct,
        leaves_deduct_amt,
        total_deduction,
        net_salary,
        net_floored,
        audit_step,
    })
}
