//! Allowance calculation.
//!
//! A shift can attract two per-shift allowances:
//!
//! - **Travel**: kilometres travelled × the per-km rate.
//! - **Meal**: a flat amount for shifts of more than five worked hours.

use rust_decimal::Decimal;

use crate::models::{AuditStep, BreakdownCategory, PayBreakdownLine};

/// Worked hours a shift must exceed to attract the meal allowance.
pub const MEAL_ALLOWANCE_THRESHOLD_HOURS: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// The result of an allowance calculation.
#[derive(Debug, Clone)]
pub struct AllowanceResult {
    /// The allowance amount; zero when the allowance does not apply.
    pub amount: Decimal,
    /// The breakdown line, present only when the allowance is paid.
    pub line: Option<PayBreakdownLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the travel allowance for a shift.
///
/// No line is produced when no distance was recorded or the distance is zero.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::calculate_travel_allowance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = calculate_travel_allowance(Some(dec("8")), dec("0.85"), 1);
/// assert_eq!(result.amount, dec("6.80"));
/// ```
pub fn calculate_travel_allowance(
    distance_km: Option<Decimal>,
    rate_per_km: Decimal,
    step_number: u32,
) -> AllowanceResult {
    let distance = distance_km.unwrap_or(Decimal::ZERO);
    let amount = distance * rate_per_km;

    let line = (distance > Decimal::ZERO).then(|| PayBreakdownLine {
        description: format!("Travel allowance ({} km)", distance.normalize()),
        hours: None,
        rate: Some(rate_per_km),
        amount,
        category: BreakdownCategory::Allowance,
    });

    let reasoning = if distance > Decimal::ZERO {
        format!("{} km × ${}/km = ${}", distance, rate_per_km, amount)
    } else {
        "No travel recorded".to_string()
    };

    AllowanceResult {
        amount,
        line,
        audit_step: AuditStep {
            step_number,
            rule_id: "travel_allowance".to_string(),
            rule_name: "Travel Allowance".to_string(),
            input: serde_json::json!({
                "distance_km": distance.to_string(),
                "rate_per_km": rate_per_km.to_string()
            }),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning,
        },
    }
}

/// Calculates the meal allowance for a shift of `worked_hours`.
///
/// The allowance is paid once when worked hours strictly exceed
/// [`MEAL_ALLOWANCE_THRESHOLD_HOURS`]; a shift of exactly five hours gets none.
pub fn calculate_meal_allowance(
    worked_hours: Decimal,
    meal_rate: Decimal,
    step_number: u32,
) -> AllowanceResult {
    let eligible = worked_hours > MEAL_ALLOWANCE_THRESHOLD_HOURS;
    let amount = if eligible { meal_rate } else { Decimal::ZERO };

    let line = eligible.then(|| PayBreakdownLine {
        description: "Meal allowance".to_string(),
        hours: None,
        rate: None,
        amount,
        category: BreakdownCategory::Allowance,
    });

    let reasoning = if eligible {
        format!(
            "{} worked hours exceeds {}; meal allowance ${} applies",
            worked_hours, MEAL_ALLOWANCE_THRESHOLD_HOURS, meal_rate
        )
    } else {
        format!(
            "{} worked hours does not exceed {}; no meal allowance",
            worked_hours, MEAL_ALLOWANCE_THRESHOLD_HOURS
        )
    };

    AllowanceResult {
        amount,
        line,
        audit_step: AuditStep {
            step_number,
            rule_id: "meal_allowance".to_string(),
            rule_name: "Meal Allowance".to_string(),
            input: serde_json::json!({
                "worked_hours": worked_hours.to_string(),
                "threshold_hours": MEAL_ALLOWANCE_THRESHOLD_HOURS.to_string()
            }),
            output: serde_json::json!({
                "eligible": eligible,
                "amount": amount.to_string()
            }),
            reasoning,
        },
    }
}
