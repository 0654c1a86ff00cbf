//! Salary Engine for Indian payroll structures
//!
//! This crate computes monthly salary breakdowns from an employee's annual
//! CTC and fixed pay: leave pro-ration, the Basic/HRA/Conveyance/Other split,
//! professional tax and net pay. It also lays results out as payslips and
//! serves both over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
