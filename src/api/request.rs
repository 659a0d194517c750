//! Request types for the SCHADS pay engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::ShiftRecord;

/// Request body for the `/calculate` endpoint.
///
/// When `award_version` is omitted the rate table in force on the first
/// shift's date is used for every shift in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Explicit award version to price against (e.g., "2025-07-01").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub award_version: Option<String>,
    /// The shifts to price, in timesheet order.
    pub shifts: Vec<ShiftRecord>,
}
