//! Period pay calculation.
//!
//! Prices the hours in one pay category: `hours × base_rate × multiplier`.
//! Regular hours use a multiplier of one; every other category takes its
//! multiplier from the rate table's [`PenaltyMultipliers`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PenaltyMultipliers;
use crate::models::{AuditStep, BreakdownCategory, PayBreakdownLine};

use super::{DayType, get_day_type};

/// The pay category a block of hours is priced under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodKind {
    /// Ordinary weekday hours.
    Regular,
    /// Weekday evening hours.
    Evening,
    /// Weekday night hours.
    Night,
    /// Saturday hours.
    Saturday,
    /// Sunday hours.
    Sunday,
    /// Public-holiday hours.
    PublicHoliday,
}

impl PeriodKind {
    /// Returns the weekend kind for a shift date: Sunday on a Sunday, Saturday otherwise.
    pub fn weekend_for(date: NaiveDate) -> Self {
        match get_day_type(date) {
            DayType::Sunday => PeriodKind::Sunday,
            _ => PeriodKind::Saturday,
        }
    }

    /// Returns the multiplier applied to the base rate for this kind.
    pub fn multiplier(self, multipliers: &PenaltyMultipliers) -> Decimal {
        match self {
            PeriodKind::Regular => Decimal::ONE,
            PeriodKind::Evening => multipliers.evening,
            PeriodKind::Night => multipliers.night,
            PeriodKind::Saturday => multipliers.saturday,
            PeriodKind::Sunday => multipliers.sunday,
            PeriodKind::PublicHoliday => multipliers.public_holiday,
        }
    }

    /// Returns the breakdown line description.
    pub fn description(self) -> &'static str {
        match self {
            PeriodKind::Regular => "Regular hours",
            PeriodKind::Evening => "Evening hours",
            PeriodKind::Night => "Night hours",
            PeriodKind::Saturday => "Saturday hours",
            PeriodKind::Sunday => "Sunday hours",
            PeriodKind::PublicHoliday => "Public holiday hours",
        }
    }

    /// Returns the breakdown category for lines of this kind.
    pub fn category(self) -> BreakdownCategory {
        match self {
            PeriodKind::Regular => BreakdownCategory::Regular,
            _ => BreakdownCategory::Penalty,
        }
    }

    fn rule_id(self) -> &'static str {
        match self {
            PeriodKind::Regular => "regular_pay",
            PeriodKind::Evening => "evening_penalty",
            PeriodKind::Night => "night_penalty",
            PeriodKind::Saturday => "saturday_penalty",
            PeriodKind::Sunday => "sunday_penalty",
            PeriodKind::PublicHoliday => "public_holiday_penalty",
        }
    }
}

/// The result of pricing one pay category.
#[derive(Debug, Clone)]
pub struct PeriodPayResult {
    /// The pay for the category; zero when no hours fall in it.
    pub amount: Decimal,
    /// The breakdown line, present only when the category has hours.
    pub line: Option<PayBreakdownLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices `hours` under `kind` at `base_rate`.
///
/// # Example
///
/// ```
/// use schads_engine::calculation::{calculate_period_pay, PeriodKind};
/// use schads_engine::config::PenaltyMultipliers;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let multipliers = PenaltyMultipliers {
///     evening: dec("1.25"),
///     night: dec("1.50"),
///     saturday: dec("1.25"),
///     sunday: dec("1.50"),
///     public_holiday: dec("2.00"),
///     overtime: dec("1.50"),
/// };
///
/// let result = calculate_period_pay(PeriodKind::Evening, dec("2"), dec("42.00"), &multipliers, 2);
/// assert_eq!(result.amount, dec("105.00"));
/// assert_eq!(result.line.unwrap().rate, Some(dec("52.50")));
/// ```
pub fn calculate_period_pay(
    kind: PeriodKind,
    hours: Decimal,
    base_rate: Decimal,
    multipliers: &PenaltyMultipliers,
    step_number: u32,
) -> PeriodPayResult {
    let multiplier = kind.multiplier(multipliers);
    let rate = base_rate * multiplier;
    let amount = hours * rate;

    let line = if hours > Decimal::ZERO {
        Some(PayBreakdownLine {
            description: kind.description().to_string(),
            hours: Some(hours),
            rate: Some(rate),
            amount,
            category: kind.category(),
        })
    } else {
        None
    };

    let reasoning = if hours > Decimal::ZERO {
        format!(
            "{} × ${} × {} = ${}",
            hours, base_rate, multiplier, amount
        )
    } else {
        format!("No {} to price", kind.description().to_lowercase())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: kind.rule_id().to_string(),
        rule_name: kind.description().to_string(),
        input: serde_json::json!({
            "hours": hours.to_string(),
            "base_rate": base_rate.to_string(),
            "multiplier": multiplier.to_string()
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    PeriodPayResult {
        amount,
        line,
        audit_step,
    }
}
