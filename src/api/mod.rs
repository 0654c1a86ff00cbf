//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for calculating monthly
//! salaries and building payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
