//! Integration tests for the Salary Engine HTTP API.
//!
//! This test suite covers:
//! - Full months, leave pro-ration and leap-year Februaries
//! - Excess leave and zero pay
//! - Professional tax overrides
//! - Payslip generation
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use salary_engine::api::{create_router, AppState};
use salary_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    create_router(AppState::new(config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_calculate(body: Value) -> (StatusCode, Value) {
    post_json(create_router_for_test(), "/calculate", body.to_string()).await
}

fn salary(ctc: &str, fixed_pay: &str, year: i32, month: u32, leaves: &str) -> Value {
    json!({
        "ctc": ctc,
        "fixed_pay": fixed_pay,
        "year": year,
        "month": month,
        "leaves_count": leaves
    })
}

fn field(result: &Value, name: &str) -> Decimal {
    let value = &result["result"][name];
    match value.as_str() {
        Some(s) => decimal(s),
        None => Decimal::from(value.as_u64().unwrap()),
    }
}

fn assert_field(result: &Value, name: &str, expected: &str) {
    assert_eq!(
        field(result, name),
        decimal(expected),
        "Expected {} {}, got {}",
        name,
        expected,
        result["result"][name]
    );
}

fn warning_codes(body: &Value) -> Vec<String> {
    body["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Calculation
// =============================================================================

#[tokio::test]
async fn test_full_month_no_leave() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 1, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "variable_pay", "120000");
    assert_field(&body, "month_days", "31");
    assert_field(&body, "per_month", "40000");
    assert_field(&body, "per_day", "1290.32");
    assert_field(&body, "work_days", "31");
    assert_field(&body, "basic", "20000");
    assert_field(&body, "hra", "4000");
    assert_field(&body, "conveyance_allowance", "1600");
    assert_field(&body, "other_allowance", "14400");
    assert_field(&body, "gross_salary", "40000");
    assert_field(&body, "pt_deduct", "200");
    assert_field(&body, "leaves_deduct_amt", "0");
    assert_field(&body, "total_deduction", "200");
    assert_field(&body, "net_salary", "39800");
}

#[tokio::test]
async fn test_february_with_two_leave_days() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 2, "2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "month_days", "28");
    assert_field(&body, "per_day", "1428.57");
    assert_field(&body, "work_days", "26");
    assert_field(&body, "leaves_deduct_amt", "2857.14");
    assert_field(&body, "gross_salary", "37143");
    assert_field(&body, "net_salary", "34085.86");
}

#[tokio::test]
async fn test_leap_year_february() {
    let (status, body) = post_calculate(salary("600000", "480000", 2024, 2, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "month_days", "29");
}

#[tokio::test]
async fn test_excess_leave_floors_net() {
    let (status, body) = post_calculate(salary("360000", "360000", 2025, 4, "35")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "work_days", "-5");
    assert_field(&body, "gross_salary", "0");
    assert_field(&body, "net_salary", "0");

    let codes = warning_codes(&body);
    assert!(codes.contains(&"LEAVES_EXCEED_MONTH_DAYS".to_string()));
    assert!(codes.contains(&"DEDUCTIONS_EXCEED_GROSS".to_string()));
}

#[tokio::test]
async fn test_zero_fixed_pay() {
    let (status, body) = post_calculate(salary("0", "0", 2025, 5, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "month_days", "31");
    for name in [
        "per_month",
        "per_day",
        "basic",
        "hra",
        "conveyance_allowance",
        "other_allowance",
        "gross_salary",
        "pt_deduct",
        "total_deduction",
        "net_salary",
    ] {
        assert_field(&body, name, "0");
    }
}

#[tokio::test]
async fn test_leave_beyond_a_year_floors_net() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 1, "400")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "work_days", "-369");
    assert_field(&body, "gross_salary", "0");
    assert_field(&body, "net_salary", "0");
}

#[tokio::test]
async fn test_ctc_above_one_lakh_crore_accepted() {
    let (status, body) = post_calculate(salary("2000000000000", "480000", 2025, 1, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "net_salary", "39800");
}

#[tokio::test]
async fn test_numeric_json_values_accepted() {
    let body = json!({
        "ctc": 600000,
        "fixed_pay": 480000,
        "year": 2025,
        "month": 1,
        "leaves_count": 0.5
    });
    let (status, result) = post_calculate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "work_days", "30.5");
    assert_field(&result, "leaves_deduct_amt", "645.16");
}

#[tokio::test]
async fn test_pt_override() {
    let mut body = salary("600000", "480000", 2025, 1, "0");
    body["pt_deduct"] = json!("150");
    let (status, result) = post_calculate(body).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&result, "pt_deduct", "150");
    assert_field(&result, "net_salary", "39850");
}

#[tokio::test]
async fn test_response_contains_audit_trace_and_metadata() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 1, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["calculation_id"].is_string());
    assert!(body["timestamp"].is_string());
    assert!(body["engine_version"].is_string());
    assert_eq!(body["period"], json!({"year": 2025, "month": 1}));
    assert_eq!(body["audit_trace"]["steps"].as_array().unwrap().len(), 5);
    assert!(body["audit_trace"]["duration_us"].is_u64());
}

#[tokio::test]
async fn test_fixed_pay_above_ctc_warns() {
    let (status, body) = post_calculate(salary("400000", "480000", 2025, 1, "0")).await;

    assert_eq!(status, StatusCode::OK);
    assert_field(&body, "variable_pay", "0");
    assert!(warning_codes(&body).contains(&"FIXED_PAY_EXCEEDS_CTC".to_string()));
}

// =============================================================================
// Payslip
// =============================================================================

#[tokio::test]
async fn test_payslip_generation() {
    let request = json!({
        "employee": {
            "id": "EMP-0042",
            "name": "Asha Rao",
            "designation": "Software Engineer",
            "department": "Engineering",
            "date_of_joining": "2023-06-01"
        },
        "salary": salary("600000", "480000", 2025, 2, "2")
    });
    let (status, body) =
        post_json(create_router_for_test(), "/payslip", request.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company_name"], "Example Technologies Pvt Ltd");
    assert_eq!(body["employee"]["id"], "EMP-0042");
    assert_eq!(body["period_label"], "February 2025");
    assert_eq!(body["earnings"].as_array().unwrap().len(), 4);
    assert_eq!(body["deductions"].as_array().unwrap().len(), 2);
    assert_eq!(body["deductions"][1]["component"], "leave_deduction");
    assert_eq!(
        decimal(body["net_pay"].as_str().unwrap()),
        decimal("34085.86")
    );
    assert_eq!(decimal(body["paid_days"].as_str().unwrap()), decimal("26"));
}

#[tokio::test]
async fn test_payslip_invalid_month() {
    let request = json!({
        "employee": {"id": "EMP-1", "name": "Ravi", "designation": "Analyst"},
        "salary": salary("600000", "480000", 2025, 0, "0")
    });
    let (status, body) =
        post_json(create_router_for_test(), "/payslip", request.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PERIOD");
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        "{ not valid json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_fixed_pay() {
    let body = json!({
        "ctc": "600000",
        "year": 2025,
        "month": 1,
        "leaves_count": "0"
    });
    let (status, result) = post_calculate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
    assert!(result["message"].as_str().unwrap().contains("fixed_pay"));
}

#[tokio::test]
async fn test_error_invalid_month() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 13, "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PERIOD");
}

#[tokio::test]
async fn test_error_negative_leaves() {
    let (status, body) = post_calculate(salary("600000", "480000", 2025, 1, "-1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"], "leaves_count");
}

#[tokio::test]
async fn test_error_unrepresentable_leave_amount() {
    let (status, body) = post_calculate(salary(
        "600000",
        "480000",
        2025,
        1,
        "79228162514264337593543950335",
    ))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "CALCULATION_ERROR");
    assert!(body["details"].as_str().unwrap().contains("overflows"));
}

#[tokio::test]
async fn test_error_non_numeric_amount() {
    let (status, body) = post_calculate(salary("six lakh", "480000", 2025, 1, "0")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}
