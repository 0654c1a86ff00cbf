//! Monthly salary input model.
//!
//! This module defines [`MonthlySalaryInput`], the transient value a caller
//! builds every time one of the salary form fields changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::SalaryMonth;

/// Largest annual amount (₹) accepted for `fixed_pay` and the professional
/// tax override.
///
/// Keeps the monthly and daily rates well inside the range of [`Decimal`].
pub const MAX_ANNUAL_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// The inputs of a monthly salary calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::MonthlySalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = MonthlySalaryInput::new(
///     Decimal::from(600_000),
///     Decimal::from(480_000),
///     2025,
///     1,
///     Decimal::ZERO,
/// );
/// let period = input.validate().unwrap();
/// assert_eq!(period.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalaryInput {
    /// Annual cost to company (₹).
    pub ctc: Decimal,
    /// Annual fixed component of the CTC (₹).
    pub fixed_pay: Decimal,
    /// Calendar year of the pay period.
    pub year: i32,
    /// Calendar month of the pay period, `1..=12`.
    pub month: u32,
    /// Unpaid leave days taken in the month. Fractions are allowed.
    pub leaves_count: Decimal,
    /// Professional tax override. `None` or zero falls back to the policy default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pt_deduct: Option<Decimal>,
}

impl MonthlySalaryInput {
    /// Creates an input without a professional tax override.
    pub fn new(
        ctc: Decimal,
        fixed_pay: Decimal,
        year: i32,
        month: u32,
        leaves_count: Decimal,
    ) -> Self {
        Self {
            ctc,
            fixed_pay,
            year,
            month,
            leaves_count,
            pt_deduct: None,
        }
    }

    /// Sets the professional tax override.
    pub fn with_pt_deduct(mut self, pt_deduct: Decimal) -> Self {
        self.pt_deduct = Some(pt_deduct);
        self
    }

    /// Validates the input and resolves its pay period.
    ///
    /// Rejects a month outside `1..=12`, negative amounts or leave counts, and
    /// a fixed pay or tax override above [`MAX_ANNUAL_AMOUNT`]. `fixed_pay > ctc`
    /// and any non-negative leave count are accepted; the calculation floors
    /// the affected figures.
    pub fn validate(&self) -> EngineResult<SalaryMonth> {
        let period = SalaryMonth::new(self.year, self.month)?;

        check_non_negative("ctc", self.ctc)?;
        check_non_negative("fixed_pay", self.fixed_pay)?;
        check_at_most("fixed_pay", self.fixed_pay, MAX_ANNUAL_AMOUNT)?;
        check_non_negative("leaves_count", self.leaves_count)?;
        if let Some(pt_deduct) = self.pt_deduct {
            check_non_negative("pt_deduct", pt_deduct)?;
            check_at_most("pt_deduct", pt_deduct, MAX_ANNUAL_AMOUNT)?;
        }

        Ok(period)
    }
}

fn check_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    Ok(())
}

fn check_at_most(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", max, value),
        });
    }
    Ok(())
}
