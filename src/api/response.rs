//! Response types for the SCHADS pay engine API.
//!
//! This module defines the success envelope for `/calculate`, the rate
//! version listing for `/rates`, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AllowanceRates;
use crate::error::EngineError;
use crate::models::{PayCalculationResult, TimesheetSummary};

/// Response body for a successful `/calculate` request.
///
/// The id and timestamp belong to the request envelope only; each entry in
/// `results` is a deterministic function of its shift and the rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation request.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the results.
    pub engine_version: String,
    /// The award version applied to every result, or `None` when the shifts
    /// were priced against more than one dated rate table.
    pub award_version: Option<String>,
    /// Per-shift results in request order.
    pub results: Vec<PayCalculationResult>,
    /// Totals across every shift.
    pub totals: PayTotals,
}

impl CalculationResponse {
    /// Wraps a timesheet summary in a fresh response envelope.
    ///
    /// Without a requested version the envelope reports the version the
    /// results share, if they share one.
    pub fn new(requested_version: Option<String>, summary: TimesheetSummary) -> Self {
        let award_version = requested_version.or_else(|| shared_award_version(&summary.results));
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            award_version,
            totals: PayTotals {
                gross_pay: summary.gross_pay,
                tax_amount: summary.tax_amount,
                total_pay: summary.total_pay,
            },
            results: summary.results,
        }
    }
}

fn shared_award_version(results: &[PayCalculationResult]) -> Option<String> {
    let first = results.first()?;
    results
        .iter()
        .all(|r| r.award_version == first.award_version)
        .then(|| first.award_version.clone())
}

/// Aggregated totals across every shift in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of GST.
    pub tax_amount: Decimal,
    /// Sum of total pay.
    pub total_pay: Decimal,
}

/// Response body for `GET /rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// The Fair Work award code.
    pub award_code: String,
    /// Loaded rate table versions, oldest first.
    pub versions: Vec<RateVersion>,
}

/// One loaded rate table version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateVersion {
    /// The award version key.
    pub award_version: String,
    /// The date from which the table applies.
    pub effective_date: NaiveDate,
    /// The version's allowance rates, including the flat sleepover and
    /// broken shift amounts that shift pricing does not apply.
    pub allowances: AllowanceRates,
}

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
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidRateTable { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::AwardVersionNotFound { version } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "AWARD_VERSION_NOT_FOUND",
                    message,
                    format!("No rate table is loaded for award version '{}'", version),
                ),
            },
            EngineError::RateTableNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_TABLE_NOT_FOUND",
                    message,
                    format!("Shift date {} precedes every loaded rate table", date),
                ),
            },
            EngineError::RateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    message,
                    "The rate table has no rate for the fallback worker level",
                ),
            },
            EngineError::InvalidShift { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    "The shift data contains invalid information",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_award_version_not_found_is_404() {
        let api_error: ApiErrorResponse = EngineError::AwardVersionNotFound {
            version: "1999-07-01".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "AWARD_VERSION_NOT_FOUND");
        assert_eq!(api_error.error.message, "Award version not found: 1999-07-01");
    }

    #[test]
    fn test_rate_table_not_found_is_400() {
        let api_error: ApiErrorResponse = EngineError::RateTableNotFound {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "RATE_TABLE_NOT_FOUND");
    }

    #[test]
    fn test_invalid_shift_is_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidShift {
            shift_id: "shift_001".to_string(),
            message: "travel distance cannot be negative (got -1 km)".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SHIFT");
        assert!(api_error.error.message.contains("shift_001"));
    }

    #[test]
    fn test_config_errors_are_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidRateTable {
            award_version: "2025-07-01".to_string(),
            message: "no base rates defined".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_response_totals_come_from_summary() {
        let summary = TimesheetSummary::from_results(vec![]);
        let response = CalculationResponse::new(Some("2025-07-01".to_string()), summary);

        assert_eq!(response.award_version.as_deref(), Some("2025-07-01"));
        assert_eq!(response.totals.total_pay, Decimal::ZERO);
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        assert!(response.results.is_empty());
    }
}
