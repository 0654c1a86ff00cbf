//! Payslip models.
//!
//! A [`Payslip`] is the render-ready view of a salary calculation: earnings
//! and deductions as labelled lines, with the header details a salary slip
//! prints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditWarning, EmployeeDetails, SalaryMonth};

/// The kind of a payslip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipComponent {
    /// Basic salary.
    Basic,
    /// House rent allowance.
    Hra,
    /// Conveyance allowance.
    ConveyanceAllowance,
    /// Balancing allowance.
    OtherAllowance,
    /// Professional tax.
    ProfessionalTax,
    /// Loss-of-pay deduction for unpaid leave.
    LeaveDeduction,
}

impl PayslipComponent {
    /// The label printed on the slip.
    pub fn label(&self) -> &'static str {
        match self {
            PayslipComponent::Basic => "Basic",
            PayslipComponent::Hra => "House Rent Allowance",
            PayslipComponent::ConveyanceAllowance => "Conveyance Allowance",
            PayslipComponent::OtherAllowance => "Other Allowance",
            PayslipComponent::ProfessionalTax => "Professional Tax",
            PayslipComponent::LeaveDeduction => "Leave Deduction",
        }
    }
}

/// A single earnings or deductions row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// What the line is for.
    pub component: PayslipComponent,
    /// The printed label.
    pub label: String,
    /// The amount in rupees.
    pub amount: Decimal,
}

impl PayslipLine {
    /// Creates a line labelled after its component.
    pub fn new(component: PayslipComponent, amount: Decimal) -> Self {
        Self {
            component,
            label: component.label().to_string(),
            amount,
        }
    }
}

/// A render-ready salary slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Identifier of the calculation this slip was built from.
    pub calculation_id: Uuid,
    /// Employer name for the slip header.
    pub company_name: String,
    /// Employer address for the slip header.
    pub company_address: String,
    /// The employee the slip is for.
    pub employee: EmployeeDetails,
    /// The pay period.
    pub period: SalaryMonth,
    /// The pay period as printed, e.g. "January 2025".
    pub period_label: String,
    /// Calendar days in the month.
    pub month_days: u32,
    /// Days paid, never below zero.
    pub paid_days: Decimal,
    /// Unpaid leave days.
    pub loss_of_pay_days: Decimal,
    /// Earnings rows.
    pub earnings: Vec<PayslipLine>,
    /// Deductions rows.
    pub deductions: Vec<PayslipLine>,
    /// Sum of the earnings rows.
    pub gross_earnings: Decimal,
    /// Sum of the deductions rows.
    pub total_deductions: Decimal,
    /// Amount paid out.
    pub net_pay: Decimal,
    /// Warnings for the HR user.
    pub warnings: Vec<AuditWarning>,
}
