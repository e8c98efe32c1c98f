//! Integration tests for the payroll engine API.
//!
//! This suite exercises every calculation endpoint end to end:
//! - Working-time breakdown (standard week, overtime, invalid schedules)
//! - Exemption-optimized salary split
//! - Mandatory insurance premiums (including the pension ceiling clamp)
//! - Income tax withholding (bracket boundaries)
//! - Annual leave (both policies, usage balance)
//! - Severance settlement
//! - Minimum wage check
//! - The composed payslip pipeline
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Weekday;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::rules::RuleLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let rules = RuleLoader::load("./config/kr2026").expect("Failed to load rule set");
    AppState::new(rules)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a Decimal out of a JSON field serialized as a string.
fn decimal_field(value: &Value, field: &str) -> Decimal {
    Decimal::from_str(value[field].as_str().unwrap_or_else(|| {
        panic!("field '{}' missing or not a string in {}", field, value)
    }))
    .unwrap()
}

fn weekdays(n: usize) -> Value {
    let days: Vec<Weekday> = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .take(n)
    .collect();
    serde_json::to_value(days).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
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

// =============================================================================
// Time breakdown
// =============================================================================

/// Scenario A: 09:00-18:00 with a 60 minute break over five workdays.
#[tokio::test]
async fn test_time_breakdown_standard_week() {
    let body = json!({
        "start_time": "09:00:00",
        "end_time": "18:00:00",
        "break_minutes": 60,
        "work_days": weekdays(5)
    });
    let (status, result) = post(create_router_for_test(), "/time-breakdown", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "daily_hours"), decimal("8"));
    assert_eq!(
        decimal_field(&result, "weekly_prescribed_hours"),
        decimal("40")
    );
    assert_eq!(
        decimal_field(&result, "weekly_overtime_hours"),
        decimal("0")
    );
    assert_eq!(result["monthly_prescribed_hours"], 209);
}

#[tokio::test]
async fn test_time_breakdown_six_days_produces_overtime() {
    let body = json!({
        "start_time": "09:00:00",
        "end_time": "18:00:00",
        "break_minutes": 60,
        "work_days": weekdays(6)
    });
    let (status, result) = post(create_router_for_test(), "/time-breakdown", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal_field(&result, "weekly_prescribed_hours"),
        decimal("40")
    );
    assert_eq!(
        decimal_field(&result, "weekly_overtime_hours"),
        decimal("8")
    );
}

#[tokio::test]
async fn test_time_breakdown_end_before_start_is_rejected() {
    let body = json!({
        "start_time": "18:00:00",
        "end_time": "09:00:00",
        "break_minutes": 0,
        "work_days": weekdays(5)
    });
    let (status, result) = post(create_router_for_test(), "/time-breakdown", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_SCHEDULE");
}

#[tokio::test]
async fn test_time_breakdown_no_work_days_is_zero() {
    let body = json!({
        "start_time": "09:00:00",
        "end_time": "18:00:00",
        "break_minutes": 60,
        "work_days": []
    });
    let (status, result) = post(create_router_for_test(), "/time-breakdown", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal_field(&result, "weekly_prescribed_hours"),
        decimal("0")
    );
    assert_eq!(result["monthly_prescribed_hours"], 0);
}

// =============================================================================
// Salary split
// =============================================================================

#[tokio::test]
async fn test_salary_split_all_eligible() {
    let body = json!({
        "target_gross": "5000000",
        "eligibility": {
            "has_own_car": true,
            "has_child_under_6": true,
            "is_researcher": true
        }
    });
    let (status, result) = post(create_router_for_test(), "/salary-split", body).await;

    assert_eq!(status, StatusCode::OK);
    let components = &result["components"];
    assert_eq!(decimal_field(components, "meal_allowance"), decimal("200000"));
    assert_eq!(
        decimal_field(components, "vehicle_allowance"),
        decimal("200000")
    );
    assert_eq!(
        decimal_field(components, "childcare_allowance"),
        decimal("200000")
    );
    assert_eq!(
        decimal_field(components, "research_allowance"),
        decimal("200000")
    );
    assert_eq!(decimal_field(components, "base_salary"), decimal("4200000"));
    assert_eq!(result["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_salary_split_negative_gross_is_rejected() {
    let body = json!({ "target_gross": "-100" });
    let (status, result) = post(create_router_for_test(), "/salary-split", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_AMOUNT");
}

#[tokio::test]
async fn test_salary_split_flags_sub_minimum_base() {
    let body = json!({
        "target_gross": "1700000",
        "monthly_hours": "209"
    });
    let (status, result) = post(create_router_for_test(), "/salary-split", body).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = result["warnings"].as_array().unwrap();
    assert!(
        warnings
            .iter()
            .any(|w| w["kind"] == "minimum_wage_violation")
    );
}

// =============================================================================
// Insurance
// =============================================================================

/// Scenario C: the national pension base clamps at the ceiling.
#[tokio::test]
async fn test_insurance_pension_ceiling_clamp() {
    let body = json!({ "taxable_base": "10000000" });
    let (status, result) = post(create_router_for_test(), "/insurance", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "national_pension"), decimal("302575"));
    assert_eq!(decimal_field(&result, "health_insurance"), decimal("359500"));
}

#[tokio::test]
async fn test_insurance_standard_base() {
    let body = json!({ "taxable_base": "3000000" });
    let (status, result) = post(create_router_for_test(), "/insurance", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "national_pension"), decimal("142500"));
    assert_eq!(decimal_field(&result, "health_insurance"), decimal("107850"));
    assert_eq!(decimal_field(&result, "long_term_care"), decimal("13967"));
    assert_eq!(
        decimal_field(&result, "employment_insurance"),
        decimal("27000")
    );
}

#[tokio::test]
async fn test_insurance_negative_base_is_rejected() {
    let body = json!({ "taxable_base": "-1" });
    let (status, result) = post(create_router_for_test(), "/insurance", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_AMOUNT");
}

// =============================================================================
// Income tax
// =============================================================================

/// Scenario B: exact bracket boundary at 3,000,000.
#[tokio::test]
async fn test_income_tax_bracket_boundary() {
    let body = json!({ "monthly_taxable_income": "3000000" });
    let (status, result) = post(create_router_for_test(), "/income-tax", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "income_tax"), decimal("251400"));
    assert_eq!(decimal_field(&result, "local_tax"), decimal("25140"));
}

#[tokio::test]
async fn test_income_tax_just_past_boundary_rounds_back() {
    let body = json!({ "monthly_taxable_income": "3000001" });
    let (status, result) = post(create_router_for_test(), "/income-tax", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "income_tax"), decimal("251400"));
}

#[tokio::test]
async fn test_income_tax_below_threshold_is_zero() {
    let body = json!({ "monthly_taxable_income": "1000000" });
    let (status, result) = post(create_router_for_test(), "/income-tax", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "income_tax"), decimal("0"));
    assert_eq!(decimal_field(&result, "local_tax"), decimal("0"));
}

// =============================================================================
// Annual leave
// =============================================================================

/// Scenario D: five service years under the anniversary policy.
#[tokio::test]
async fn test_annual_leave_five_years() {
    let body = json!({
        "hire_date": "2021-06-15",
        "reference_year": 2026,
        "policy": "hire_date_anniversary"
    });
    let (status, result) = post(create_router_for_test(), "/annual-leave", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        decimal_field(&result["entitlement"], "total_days"),
        decimal("17")
    );
    assert!(result.get("balance").is_none() || result["balance"].is_null());
}

#[tokio::test]
async fn test_annual_leave_balance_with_overuse_warning() {
    let body = json!({
        "hire_date": "2024-01-02",
        "reference_year": 2026,
        "policy": "hire_date_anniversary",
        "usage": [
            { "date": "2026-02-02", "days": "10", "reason": "travel" },
            { "date": "2026-03-02", "days": "7", "reason": "medical" }
        ]
    });
    let (status, result) = post(create_router_for_test(), "/annual-leave", body).await;

    assert_eq!(status, StatusCode::OK);
    let balance = &result["balance"];
    assert_eq!(decimal_field(balance, "entitled_days"), decimal("15"));
    assert_eq!(decimal_field(balance, "used_days"), decimal("17"));
    assert_eq!(decimal_field(balance, "remaining_days"), decimal("-2"));
    let warnings = balance["warnings"].as_array().unwrap();
    assert_eq!(warnings[0]["kind"], "leave_overuse");
}

#[tokio::test]
async fn test_annual_leave_fiscal_year_proration() {
    let body = json!({
        "hire_date": "2026-03-02",
        "reference_year": 2026,
        "policy": "fiscal_year"
    });
    let (status, result) = post(create_router_for_test(), "/annual-leave", body).await;

    assert_eq!(status, StatusCode::OK);
    // 9 remaining months: 9/12 x 15 = 11.25 -> 11.3
    assert_eq!(
        decimal_field(&result["entitlement"], "total_days"),
        decimal("11.3")
    );
}

// =============================================================================
// Severance
// =============================================================================

/// Scenario E: three equal samples over two service years.
#[tokio::test]
async fn test_severance_two_year_tenure() {
    let body = json!({
        "samples": [
            { "gross_pay": "3000000", "calendar_days": 30 },
            { "gross_pay": "3000000", "calendar_days": 30 },
            { "gross_pay": "3000000", "calendar_days": 30 }
        ],
        "tenure_days": 730
    });
    let (status, result) = post(create_router_for_test(), "/severance", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "avg_daily_wage"), decimal("100000"));
    assert_eq!(
        decimal_field(&result, "severance_amount"),
        decimal("6000000")
    );
    assert_eq!(result["entitled"], true);
}

#[tokio::test]
async fn test_severance_sub_year_tenure_not_entitled() {
    let body = json!({
        "samples": [
            { "gross_pay": "3000000", "calendar_days": 30 },
            { "gross_pay": "3000000", "calendar_days": 30 },
            { "gross_pay": "3000000", "calendar_days": 30 }
        ],
        "tenure_days": 200
    });
    let (status, result) = post(create_router_for_test(), "/severance", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entitled"], false);
    // The arithmetic result is still returned for the caller to display
    assert!(decimal_field(&result, "severance_amount") > decimal("0"));
}

// =============================================================================
// Minimum wage
// =============================================================================

#[tokio::test]
async fn test_minimum_wage_compliant_hourly() {
    let body = json!({ "wage": { "hourly": "10320" } });
    let (status, result) = post(create_router_for_test(), "/minimum-wage", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["compliant"], true);
}

#[tokio::test]
async fn test_minimum_wage_violation_monthly() {
    let body = json!({
        "wage": { "monthly": { "amount": "2000000", "monthly_hours": "209" } }
    });
    let (status, result) = post(create_router_for_test(), "/minimum-wage", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["compliant"], false);
    assert_eq!(result["flag"]["kind"], "minimum_wage_violation");
}

#[tokio::test]
async fn test_minimum_wage_probation_reduced_floor() {
    let body = json!({
        "wage": { "hourly": "9300" },
        "context": { "is_probation": true, "probation_rate": null }
    });
    let (status, result) = post(create_router_for_test(), "/minimum-wage", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["compliant"], true);
}

// =============================================================================
// Payslip
// =============================================================================

#[tokio::test]
async fn test_payslip_end_to_end() {
    let body = json!({
        "target_gross": "3000000",
        "eligibility": {
            "has_own_car": false,
            "has_child_under_6": false,
            "is_researcher": false
        }
    });
    let (status, result) = post(create_router_for_test(), "/payslip", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal_field(&result, "gross_pay"), decimal("3000000"));
    assert_eq!(decimal_field(&result, "taxable_income"), decimal("2800000"));

    let premiums = &result["premiums"];
    let withholding = &result["withholding"];
    let total_deductions = decimal_field(premiums, "national_pension")
        + decimal_field(premiums, "health_insurance")
        + decimal_field(premiums, "long_term_care")
        + decimal_field(premiums, "employment_insurance")
        + decimal_field(withholding, "income_tax")
        + decimal_field(withholding, "local_tax");
    assert_eq!(
        decimal_field(&result, "net_pay"),
        decimal("3000000") - total_deductions
    );

    // Local tax is always a tenth of the rounded income tax
    let income_tax = decimal_field(withholding, "income_tax");
    let local_tax = decimal_field(withholding, "local_tax");
    assert_eq!(local_tax, (income_tax * decimal("0.1")).round());

    assert_eq!(result["rule_set_version"], "2026");
    assert!(result["calculation_id"].as_str().is_some());
}

#[tokio::test]
async fn test_payslip_conservation_of_gross() {
    let body = json!({
        "target_gross": "4321987",
        "eligibility": {
            "has_own_car": true,
            "has_child_under_6": true,
            "is_researcher": false
        }
    });
    let (status, result) = post(create_router_for_test(), "/payslip", body).await;

    assert_eq!(status, StatusCode::OK);
    let components = &result["components"];
    let sum = decimal_field(components, "base_salary")
        + decimal_field(components, "meal_allowance")
        + decimal_field(components, "vehicle_allowance")
        + decimal_field(components, "childcare_allowance")
        + decimal_field(components, "research_allowance")
        + decimal_field(components, "other_taxable_allowance");
    assert_eq!(sum, decimal("4321987"));
}

// =============================================================================
// Error handling
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payslip")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_is_validation_error() {
    let (status, result) = post(create_router_for_test(), "/insurance", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        result["code"] == "VALIDATION_ERROR" || result["code"] == "MALFORMED_JSON",
        "unexpected code: {}",
        result["code"]
    );
}
