//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_payslip, calculate_monthly_salary_with_policy};
use crate::models::MonthlySalaryInput;

use super::request::PayslipRequest;
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payslip", post(payslip_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts the monthly salary inputs and returns the calculation with its
/// audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlySalaryInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return reject(correlation_id, rejection),
    };

    match calculate_monthly_salary_with_policy(&input, state.config().policy()) {
        Ok(calculation) => {
            info!(
                correlation_id = %correlation_id,
                year = input.year,
                month = input.month,
                gross_salary = %calculation.result.gross_salary,
                net_salary = %calculation.result.net_salary,
                warnings = calculation.audit_trace.warnings.len(),
                duration_us = calculation.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(calculation)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /payslip endpoint.
///
/// Calculates the month's salary and returns it laid out as a payslip for
/// the given employee.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return reject(correlation_id, rejection),
    };

    let config = state.config();
    match calculate_monthly_salary_with_policy(&request.salary, config.policy()) {
        Ok(calculation) => {
            let payslip = build_payslip(&request.employee, config.company(), &calculation);
            info!(
                correlation_id = %correlation_id,
                employee_id = %payslip.employee.id,
                period = %payslip.period_label,
                net_pay = %payslip.net_pay,
                "Payslip generated"
            );
            (StatusCode::OK, Json(payslip)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee.id,
                error = %err,
                "Payslip calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn reject(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Rejected request body"
    );
    ApiErrorResponse::from(rejection).into_response()
}
