//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all calculation endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_annual_leave, calculate_income_tax, calculate_insurance, calculate_severance,
    check_minimum_wage, compose_payslip, compute_time_breakdown, leave_balance, optimize_salary,
};
use crate::models::{SeveranceRecord, ShiftSchedule};

use super::request::{
    AnnualLeaveRequest, IncomeTaxRequest, InsuranceRequest, MinimumWageRequest, PayslipRequest,
    SalarySplitRequest, SeveranceRequest, TimeBreakdownRequest,
};
use super::response::{AnnualLeaveResponse, ApiError, ApiErrorResponse, MinimumWageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/time-breakdown", post(time_breakdown_handler))
        .route("/salary-split", post(salary_split_handler))
        .route("/insurance", post(insurance_handler))
        .route("/income-tax", post(income_tax_handler))
        .route("/annual-leave", post(annual_leave_handler))
        .route("/severance", post(severance_handler))
        .route("/minimum-wage", post(minimum_wage_handler))
        .route("/payslip", post(payslip_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /time-breakdown.
async fn time_breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeBreakdownRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let schedule: ShiftSchedule = request.into();
    match compute_time_breakdown(&schedule, state.rules().rule_set()) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /salary-split.
async fn salary_split_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalarySplitRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let result = optimize_salary(
        request.target_gross,
        &request.eligibility,
        request.requests.as_ref(),
        request.monthly_hours,
        state.rules().rule_set(),
    );
    match result {
        Ok(split) => (StatusCode::OK, Json(split)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /insurance.
async fn insurance_handler(
    State(state): State<AppState>,
    payload: Result<Json<InsuranceRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    match calculate_insurance(request.taxable_base, state.rules().rule_set()) {
        Ok(premiums) => (StatusCode::OK, Json(premiums)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /income-tax.
async fn income_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTaxRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    match calculate_income_tax(request.monthly_taxable_income, state.rules().rule_set()) {
        Ok(withholding) => (StatusCode::OK, Json(withholding)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /annual-leave.
async fn annual_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnnualLeaveRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let rules = state.rules().rule_set();
    let entitlement =
        match calculate_annual_leave(request.hire_date, request.reference_year, request.policy, rules)
        {
            Ok(entitlement) => entitlement,
            Err(err) => return ApiErrorResponse::from(err).into_response(),
        };
    let balance = request
        .usage
        .as_deref()
        .map(|usage| leave_balance(&entitlement, usage));
    (
        StatusCode::OK,
        Json(AnnualLeaveResponse {
            entitlement,
            balance,
        }),
    )
        .into_response()
}

/// Handler for POST /severance.
async fn severance_handler(
    State(_state): State<AppState>,
    payload: Result<Json<SeveranceRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let record: SeveranceRecord = request.into();
    match calculate_severance(&record) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /minimum-wage.
async fn minimum_wage_handler(
    State(state): State<AppState>,
    payload: Result<Json<MinimumWageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };
    let flag = check_minimum_wage(&request.wage, &request.context, state.rules().rule_set());
    (
        StatusCode::OK,
        Json(MinimumWageResponse {
            compliant: flag.is_none(),
            flag,
        }),
    )
        .into_response()
}

/// Handler for POST /payslip.
///
/// Runs the composed pipeline: salary split, taxable base, insurance
/// premiums, withholding and net pay. Compliance warnings ride along in the
/// body; the calculation still succeeds so the document can be produced.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    let result = compose_payslip(
        request.target_gross,
        &request.eligibility,
        request.requests.as_ref(),
        request.monthly_hours,
        state.rules().rule_set(),
    );
    match result {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %payslip.calculation_id,
                warnings = payslip.warnings.len(),
                "Payslip calculated"
            );
            (StatusCode::OK, Json(payslip)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payslip calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
