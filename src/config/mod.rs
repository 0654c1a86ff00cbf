//! Configuration loading and management for the Salary Engine.
//!
//! This module loads the employer profile and the salary structuring policy
//! from YAML files. [`SalaryPolicy::default`] carries the standard structure
//! for callers that run without configuration files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Loaded company: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompanyConfig, CompanyProfile, PayrollConfig, SalaryPolicy, SalaryStructureConfig,
};
