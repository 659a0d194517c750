//! HTTP request handlers for the SCHADS pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_timesheet, calculate_timesheet_with};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::TimesheetSummary;

use super::request::CalculationRequest;
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, RateVersion, RatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Prices every shift in the request and returns the per-shift results with
/// request-level totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // serde's detailed message is in the body text
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    if request.shifts.is_empty() && request.award_version.is_none() {
        warn!(correlation_id = %correlation_id, "Request has no shifts and no award version");
        return json_response(
            StatusCode::BAD_REQUEST,
            ApiError::validation_error("at least one shift or an award_version is required"),
        );
    }

    let start_time = Instant::now();
    match price_shifts(state.config(), &request) {
        Ok(summary) => {
            let duration = start_time.elapsed();
            let response = CalculationResponse::new(request.award_version, summary);
            info!(
                correlation_id = %correlation_id,
                award_version = ?response.award_version,
                shifts_count = response.results.len(),
                total_pay = %response.totals.total_pay,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Prices the request against the explicit award version if given, else
/// each shift against the table in force on its own date.
fn price_shifts(
    config: &ConfigLoader,
    request: &CalculationRequest,
) -> EngineResult<TimesheetSummary> {
    match &request.award_version {
        Some(version) => calculate_timesheet(&request.shifts, config.rate_table(version)?),
        None => calculate_timesheet_with(&request.shifts, |shift| {
            config.rate_table_for_date(shift.date)
        }),
    }
}

/// Handler for GET /rates endpoint.
///
/// Lists the loaded award versions with their effective dates and allowance
/// rates.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    let versions = config
        .config()
        .rate_tables()
        .iter()
        .map(|t| RateVersion {
            award_version: t.award_version.clone(),
            effective_date: t.effective_date,
            allowances: t.allowances.clone(),
        })
        .collect();

    json_response(
        StatusCode::OK,
        RatesResponse {
            award_code: config.award().code.clone(),
            versions,
        },
    )
}
