//! Calculation result models for the SCHADS pay engine.
//!
//! This module contains the [`PayCalculationResult`] type and its associated
//! structures: itemised breakdown lines, the audit trace, and the
//! [`TimesheetSummary`] aggregate over several shifts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of a breakdown line.
///
/// # Example
///
/// ```
/// use schads_engine::models::BreakdownCategory;
///
/// let category = BreakdownCategory::Penalty;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"penalty\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownCategory {
    /// Ordinary hours at the base rate.
    Regular,
    /// Hours paid at a penalty multiplier (evening, night, weekend, public holiday).
    Penalty,
    /// Flat or distance-based allowances.
    Allowance,
    /// GST applied to gross pay.
    Tax,
}

/// A single itemised line of a pay calculation.
///
/// Lines appear in a fixed order (regular, evening, night, weekend, public
/// holiday, travel, meal, GST) which drives invoice display order.
///
/// # Example
///
/// ```
/// use schads_engine::models::{BreakdownCategory, PayBreakdownLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayBreakdownLine {
///     description: "Regular hours".to_string(),
///     hours: Some(Decimal::from_str("3.5").unwrap()),
///     rate: Some(Decimal::from_str("45.50").unwrap()),
///     amount: Decimal::from_str("159.25").unwrap(),
///     category: BreakdownCategory::Regular,
/// };
/// assert_eq!(line.hours.unwrap() * line.rate.unwrap(), line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdownLine {
    /// Human-readable label for the line.
    pub description: String,
    /// Hours paid on this line, for hourly lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Effective rate (hourly rate, or per-km rate for travel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// The amount for this line.
    pub amount: Decimal,
    /// The category of this line.
    pub category: BreakdownCategory,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag degraded behaviour that did not stop the calculation, such
/// as a worker-level fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The ordered record of every decision made during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Returns true if a warning with `code` was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete, itemised result of pricing one shift.
///
/// This is a pure value: it carries no identifiers or timestamps of its own,
/// so calculating the same shift against the same rate table always yields an
/// equal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculationResult {
    /// The ID of the shift this result prices.
    pub shift_id: String,
    /// The award version of the rate table applied.
    pub award_version: String,
    /// The worker level whose rate was applied (after any fallback).
    pub applied_worker_level: u8,
    /// The base hourly rate applied.
    pub base_rate: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Pay for regular hours.
    pub regular_pay: Decimal,
    /// Hours classified as evening.
    pub evening_hours: Decimal,
    /// Pay for evening hours.
    pub evening_pay: Decimal,
    /// Hours classified as night.
    pub night_hours: Decimal,
    /// Pay for night hours.
    pub night_pay: Decimal,
    /// Hours classified as weekend (Saturday or Sunday).
    pub weekend_hours: Decimal,
    /// Pay for weekend hours.
    pub weekend_pay: Decimal,
    /// Hours classified as public holiday.
    pub public_holiday_hours: Decimal,
    /// Pay for public-holiday hours.
    pub public_holiday_pay: Decimal,
    /// Overtime hours. Overtime is not calculated and this is always zero.
    pub overtime_hours: Decimal,
    /// Overtime pay. Overtime is not calculated and this is always zero.
    pub overtime_pay: Decimal,
    /// Sum of evening, night, weekend and public-holiday pay.
    pub total_penalties: Decimal,
    /// Distance-based travel allowance.
    pub travel_allowance: Decimal,
    /// Flat meal allowance for shifts over five worked hours.
    pub meal_allowance: Decimal,
    /// Sum of travel and meal allowances.
    pub total_allowances: Decimal,
    /// Regular pay plus penalties plus allowances.
    pub gross_pay: Decimal,
    /// GST on gross pay.
    pub tax_amount: Decimal,
    /// Gross pay plus GST.
    pub total_pay: Decimal,
    /// Itemised lines in display order.
    pub breakdown: Vec<PayBreakdownLine>,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayCalculationResult {
    /// Returns the total worked hours across every category.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours
            + self.evening_hours
            + self.night_hours
            + self.weekend_hours
            + self.public_holiday_hours
    }
}

/// Aggregate of several independently priced shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// Per-shift results in input order.
    pub results: Vec<PayCalculationResult>,
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of GST.
    pub tax_amount: Decimal,
    /// Sum of total pay.
    pub total_pay: Decimal,
}

impl TimesheetSummary {
    /// Builds a summary, totalling the results in order.
    pub fn from_results(results: Vec<PayCalculationResult>) -> Self {
        let gross_pay = results.iter().map(|r| r.gross_pay).sum();
        let tax_amount = results.iter().map(|r| r.tax_amount).sum();
        let total_pay = results.iter().map(|r| r.total_pay).sum();
        Self {
            results,
            gross_pay,
            tax_amount,
            total_pay,
        }
    }
}
