//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    CompanyConfig, CompanyProfile, PayrollConfig, SalaryPolicy, SalaryStructureConfig,
};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── company.yaml           # Employer details for payslip headers
/// └── salary_structure.yaml  # Component split and professional tax
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Loaded company: {}", loader.company().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// describes a salary policy that fails [`SalaryPolicy::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company_path = path.join("company.yaml");
        let company = Self::load_yaml::<CompanyConfig>(&company_path)?.company;

        let structure_path = path.join("salary_structure.yaml");
        let policy = Self::load_yaml::<SalaryStructureConfig>(&structure_path)?.salary_structure;
        policy
            .validate()
            .map_err(|err| EngineError::ConfigParseError {
                path: structure_path.display().to_string(),
                message: match err {
                    EngineError::ConfigParseError { message, .. } => message,
                    other => other.to_string(),
                },
            })?;

        Ok(Self {
            config: PayrollConfig::new(company, policy),
        })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(company: CompanyProfile, policy: SalaryPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self {
            config: PayrollConfig::new(company, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        self.config.company()
    }

    /// Returns the salary policy.
    pub fn policy(&self) -> &SalaryPolicy {
        self.config.policy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "salary_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.company().currency, "INR");
        assert_eq!(loader.policy(), &SalaryPolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("company.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("invalid_yaml");
        fs::write(dir.join("company.yaml"), "company: [unterminated").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("company.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_policy_is_rejected_on_load() {
        let dir = scratch_dir("invalid_policy");
        fs::write(
            dir.join("company.yaml"),
            "company:\n  name: Acme\n  address: Pune\n",
        )
        .unwrap();
        fs::write(
            dir.join("salary_structure.yaml"),
            "salary_structure:\n  basic_percent: 150\n  hra_percent_of_basic: 20\n  conveyance_allowance: 1600\n  professional_tax: 200\n  months_per_year: 12\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("salary_structure.yaml"));
                assert!(message.contains("basic_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_allocating_more_than_gross_is_rejected_on_load() {
        let dir = scratch_dir("overallocated_policy");
        fs::write(
            dir.join("company.yaml"),
            "company:\n  name: Acme\n  address: Pune\n",
        )
        .unwrap();
        fs::write(
            dir.join("salary_structure.yaml"),
            "salary_structure:\n  basic_percent: 100\n  hra_percent_of_basic: 100\n  conveyance_allowance: 1600\n  professional_tax: 200\n  months_per_year: 12\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("salary_structure.yaml"));
                assert!(message.contains("hra_percent_of_basic"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_parts_validates_policy() {
        let company = CompanyProfile {
            name: "Acme".to_string(),
            address: "Pune".to_string(),
            currency: "INR".to_string(),
        };
        let policy = SalaryPolicy {
            months_per_year: 0,
            ..SalaryPolicy::default()
        };
        assert!(ConfigLoader::from_parts(company.clone(), policy).is_err());

        let loader = ConfigLoader::from_parts(company, SalaryPolicy::default()).unwrap();
        assert_eq!(loader.policy().professional_tax, Decimal::from(200));
    }
}
