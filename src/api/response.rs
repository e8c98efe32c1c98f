//! Response types for the payroll engine API.
//!
//! This module defines the error response structures, error handling, and
//! the composite success bodies that do not map one-to-one onto a model.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ComplianceFlag, LeaveBalance, LeaveEntitlement};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::RuleSetNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RULE_SET_ERROR",
                    "Rule set error",
                    format!("Rule set file not found: {}", path),
                ),
            },
            EngineError::RuleSetParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RULE_SET_ERROR",
                    "Rule set parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule: {}", message),
                    "The shift schedule contains invalid information",
                ),
            },
            EngineError::InvalidAmount { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}': {}", field, message),
                    "Monetary amounts must be non-negative",
                ),
            },
            EngineError::InvalidDate { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date for '{}': {}", field, message),
                    "The date input is missing or impossible",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

/// Success body for the `/annual-leave` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualLeaveResponse {
    /// The computed entitlement for the reference year.
    pub entitlement: LeaveEntitlement,
    /// Entitlement netted against the usage ledger, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<LeaveBalance>,
}

/// Success body for the `/minimum-wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumWageResponse {
    /// Whether the wage meets the applicable floor.
    pub compliant: bool,
    /// The violation flag, when the wage falls short.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<ComplianceFlag>,
}
