//! Calculation result models for the Salary Engine.
//!
//! This module contains the [`MonthlySalaryResult`] breakdown and the
//! [`SalaryCalculation`] envelope that pairs it with an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MonthlySalaryInput, SalaryMonth};

/// The complete monthly payslip breakdown.
///
/// Monetary fields are in rupees. `basic + hra + conveyance_allowance +
/// other_allowance` always equals `gross_salary` exactly, and every monetary
/// field is non-negative. `work_days` is the only field that can go negative,
/// when more leave is recorded than the month has days.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_monthly_salary;
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
/// let result = calculate_monthly_salary(&input).unwrap();
///
/// let components = result.basic + result.hra + result.conveyance_allowance + result.other_allowance;
/// assert_eq!(components, result.gross_salary);
/// assert_eq!(result.net_salary, Decimal::from(39_800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySalaryResult {
    /// Annual variable pay, `ctc - fixed_pay`, floored at zero.
    pub variable_pay: Decimal,
    /// Calendar days in the pay month.
    pub month_days: u32,
    /// Full monthly fixed entitlement before leave, rounded to paise.
    pub per_month: Decimal,
    /// Daily rate used for the leave deduction, rounded to paise.
    pub per_day: Decimal,
    /// Payable days, `month_days - leaves_count`.
    pub work_days: Decimal,
    /// Basic salary.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Flat conveyance allowance.
    pub conveyance_allowance: Decimal,
    /// Balancing allowance.
    pub other_allowance: Decimal,
    /// Sum of the four earning components.
    pub gross_salary: Decimal,
    /// Professional tax.
    pub pt_deduct: Decimal,
    /// Deduction for unpaid leave.
    pub leaves_deduct_amt: Decimal,
    /// `pt_deduct + leaves_deduct_amt`.
    pub total_deduction: Decimal,
    /// `gross_salary - total_deduction`, floored at zero.
    pub net_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag conditions the calculator absorbed (by flooring a figure)
/// that the HR user should still be told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(code: &str, message: impl Into<String>, severity: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity: severity.to_string(),
        }
    }
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use salary_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(!trace.has_warning("DEDUCTIONS_EXCEED_GROSS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// A monthly salary calculation together with its audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The resolved pay period.
    pub period: SalaryMonth,
    /// The input the result was computed from.
    pub input: MonthlySalaryInput,
    /// The payslip breakdown.
    pub result: MonthlySalaryResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
