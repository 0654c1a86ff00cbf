//! Earning component split.
//!
//! Splits the leave-adjusted monthly gross into Basic, HRA, Conveyance and
//! Other Allowance following the configured salary structure.

use rust_decimal::Decimal;

use crate::config::SalaryPolicy;
use crate::models::AuditStep;

use super::rounding::{floor_at_zero, round_paise, round_rupee};

/// The earning components of a month's salary, in whole rupees.
///
/// `gross_salary` is recomposed from the rounded parts, so the component sum
/// always matches it exactly.
#[derive(Debug, Clone)]
pub struct ComponentSplit {
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance_allowance: Decimal,
    /// Balancing allowance.
    pub other_allowance: Decimal,
    /// Sum of the four components.
    pub gross_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits the effective monthly gross into earning components.
///
/// - Basic is `basic_percent` of the effective gross.
/// - HRA is `hra_percent_of_basic` of Basic, cut down to what is left of the
///   rounded effective gross after Basic.
/// - Conveyance is the flat policy amount, not prorated by leave. It is cut
///   down to whatever the effective gross still covers after Basic and HRA,
///   and to zero if nothing is left.
/// - Other Allowance is the remainder, never negative.
///
/// A negative effective gross (more leave than days) is treated as zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::split_components;
/// use salary_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let split = split_components(Decimal::from(40_000), &SalaryPolicy::default(), 1);
/// assert_eq!(split.basic, Decimal::from(20_000));
/// assert_eq!(split.hra, Decimal::from(4_000));
/// assert_eq!(split.conveyance_allowance, Decimal::from(1_600));
/// assert_eq!(split.other_allowance, Decimal::from(14_400));
/// assert_eq!(split.gross_salary, Decimal::from(40_000));
/// ```
pub fn split_components(
    effective_gross: Decimal,
    policy: &SalaryPolicy,
    step_number: u32,
) -> ComponentSplit {
    let basis = floor_at_zero(effective_gross);
    let target = round_rupee(basis);

    let basic = round_rupee(basis * policy.basic_rate());
    let hra = round_rupee(basic * policy.hra_rate()).min(floor_at_zero(target - basic));

    let remaining = floor_at_zero(target - basic - hra);
    let conveyance_allowance = policy.conveyance_allowance.min(remaining);
    let other_allowance = floor_at_zero(remaining - conveyance_allowance);

    let gross_salary = basic + hra + conveyance_allowance + other_allowance;

    let audit_step = AuditStep {
        step_number,
        rule_id: "component_split".to_string(),
        rule_name: "Earning Component Split".to_string(),
        input: serde_json::json!({
            "effective_gross": round_paise(effective_gross).to_string(),
            "basic_percent": policy.basic_percent.normalize().to_string(),
            "hra_percent_of_basic": policy.hra_percent_of_basic.normalize().to_string(),
            "conveyance_allowance": policy.conveyance_allowance.normalize().to_string()
        }),
        output: serde_json::json!({
            "basic": basic.to_string(),
            "hra": hra.to_string(),
            "conveyance_allowance": conveyance_allowance.normalize().to_string(),
            "other_allowance": other_allowance.to_string(),
            "gross_salary": gross_salary.to_string(),
            "conveyance_reduced": conveyance_allowance < policy.conveyance_allowance
        }),
        reasoning: format!(
            "Basic {}% of ₹{} = ₹{}; HRA {}% of Basic = ₹{}; Conveyance ₹{}; Other ₹{}; Gross ₹{}",
            policy.basic_percent.normalize(),
            target,
            basic,
            policy.hra_percent_of_basic.normalize(),
            hra,
            conveyance_allowance.normalize(),
            other_allowance,
            gross_salary
        ),
    };

    ComponentSplit {
        basic,
        hra,
        conveyance_allowance,
        other_allowance,
        gross_salary,
        audit_step,
    }
}
