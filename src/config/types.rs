//! Configuration types for salary structuring.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The employer, as printed on payslip headers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyProfile {
    /// Registered company name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// ISO currency code of all amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// Company configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// The company profile.
    pub company: CompanyProfile,
}

/// How a month's fixed pay is split into components and taxed.
///
/// Percentages are expressed out of 100.
///
/// # Example
///
/// ```
/// use salary_engine::config::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = SalaryPolicy::default();
/// assert_eq!(policy.basic_percent, Decimal::from(50));
/// assert_eq!(policy.professional_tax, Decimal::from(200));
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryPolicy {
    /// Basic as a percentage of the effective monthly gross.
    pub basic_percent: Decimal,
    /// HRA as a percentage of Basic.
    pub hra_percent_of_basic: Decimal,
    /// Flat monthly conveyance allowance (₹).
    pub conveyance_allowance: Decimal,
    /// Default monthly professional tax (₹).
    pub professional_tax: Decimal,
    /// Number of pay months the annual fixed pay is spread over.
    pub months_per_year: u32,
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            basic_percent: Decimal::from(50),
            hra_percent_of_basic: Decimal::from(20),
            conveyance_allowance: Decimal::from(1600),
            professional_tax: Decimal::from(200),
            months_per_year: 12,
        }
    }
}

impl SalaryPolicy {
    /// Basic as a fraction of the effective gross.
    pub fn basic_rate(&self) -> Decimal {
        self.basic_percent / Decimal::ONE_HUNDRED
    }

    /// HRA as a fraction of Basic.
    pub fn hra_rate(&self) -> Decimal {
        self.hra_percent_of_basic / Decimal::ONE_HUNDRED
    }

    /// Checks that the percentages are within `0..=100` and Basic plus HRA
    /// stays within the effective gross, that the amounts are not negative,
    /// and that the year has at least one pay month.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: "salary_structure".to_string(),
            message,
        };

        for (name, percent) in [
            ("basic_percent", self.basic_percent),
            ("hra_percent_of_basic", self.hra_percent_of_basic),
        ] {
            if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
                return Err(invalid(format!(
                    "{} must be between 0 and 100 (got {})",
                    name, percent
                )));
            }
        }

        let basic_and_hra = self.basic_rate() * (Decimal::ONE + self.hra_rate());
        if basic_and_hra > Decimal::ONE {
            return Err(invalid(format!(
                "basic_percent {} with hra_percent_of_basic {} allocates {}% of gross",
                self.basic_percent.normalize(),
                self.hra_percent_of_basic.normalize(),
                (basic_and_hra * Decimal::ONE_HUNDRED).normalize()
            )));
        }

        for (name, amount) in [
            ("conveyance_allowance", self.conveyance_allowance),
            ("professional_tax", self.professional_tax),
        ] {
            if amount < Decimal::ZERO {
                return Err(invalid(format!(
                    "{} must not be negative (got {})",
                    name, amount
                )));
            }
        }

        if self.months_per_year == 0 {
            return Err(invalid("months_per_year must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Salary structure configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryStructureConfig {
    /// The salary policy.
    pub salary_structure: SalaryPolicy,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    company: CompanyProfile,
    policy: SalaryPolicy,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(company: CompanyProfile, policy: SalaryPolicy) -> Self {
        Self { company, policy }
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the salary policy.
    pub fn policy(&self) -> &SalaryPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_rates() {
        let policy = SalaryPolicy::default();
        assert_eq!(policy.basic_rate(), dec("0.5"));
        assert_eq!(policy.hra_rate(), dec("0.2"));
        assert_eq!(policy.conveyance_allowance, dec("1600"));
        assert_eq!(policy.months_per_year, 12);
    }

    #[test]
    fn test_percent_above_hundred_is_rejected() {
        let policy = SalaryPolicy {
            basic_percent: dec("120"),
            ..SalaryPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("basic_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_and_hra_above_gross_is_rejected() {
        let policy = SalaryPolicy {
            basic_percent: dec("100"),
            hra_percent_of_basic: dec("100"),
            ..SalaryPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("200%"), "unexpected message: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_basic_and_hra_filling_gross_is_accepted() {
        let policy = SalaryPolicy {
            basic_percent: dec("50"),
            hra_percent_of_basic: dec("100"),
            ..SalaryPolicy::default()
        };
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_negative_professional_tax_is_rejected() {
        let policy = SalaryPolicy {
            professional_tax: dec("-1"),
            ..SalaryPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_zero_months_per_year_is_rejected() {
        let policy = SalaryPolicy {
            months_per_year: 0,
            ..SalaryPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_deserialize_salary_structure() {
        let yaml = r#"
salary_structure:
  basic_percent: 40
  hra_percent_of_basic: 50
  conveyance_allowance: 1600
  professional_tax: 200
  months_per_year: 12
"#;
        let config: SalaryStructureConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.salary_structure.basic_percent, dec("40"));
        assert_eq!(config.salary_structure.hra_rate(), dec("0.5"));
    }

    #[test]
    fn test_company_currency_defaults_to_inr() {
        let yaml = r#"
company:
  name: Acme Technologies Pvt Ltd
  address: 12 MG Road, Bengaluru
"#;
        let config: CompanyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.company.currency, "INR");
    }
}
