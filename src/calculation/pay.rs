//! Shift pay calculation.
//!
//! [`calculate_pay`] composes the base rate lookup, the time-period split,
//! the per-category pay lines, allowances and GST into one itemised
//! [`PayCalculationResult`]. It is a pure function of the shift and the rate
//! table: no clock reads, no ids, no I/O.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, PayCalculationResult, ShiftRecord, TimesheetSummary,
};

use super::{
    PeriodKind, apply_gst, calculate_meal_allowance, calculate_period_pay,
    calculate_travel_allowance, get_base_rate, split_shift,
};

/// Audit warning code recorded because overtime is not computed.
pub const OVERTIME_NOT_CALCULATED_WARNING: &str = "OVERTIME_NOT_CALCULATED";

/// Calculates the pay for a single shift.
///
/// Breakdown lines appear in a fixed order: regular, evening, night, weekend,
/// public holiday, travel allowance, meal allowance, then GST. Hourly and
/// allowance lines are omitted when zero; the GST line is always last.
///
/// Overtime is not computed. `overtime_hours` and `overtime_pay` are always
/// zero and the audit trace carries an `OVERTIME_NOT_CALCULATED` warning.
///
/// # Errors
///
/// - [`EngineError::InvalidShift`](crate::error::EngineError::InvalidShift)
///   when the shift fails validation.
/// - [`EngineError::RateNotFound`](crate::error::EngineError::RateNotFound)
///   when neither the worker level nor the fallback level has a rate.
///
/// # Example
///
/// ```no_run
/// use schads_engine::calculation::calculate_pay;
/// use schads_engine::config::ConfigLoader;
/// use schads_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/schads").unwrap();
/// let table = loader.rate_table("2025-07-01").unwrap();
///
/// let shift = ShiftRecord {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 8, 13).unwrap(),
///     start_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
///     break_unpaid_hours: Decimal::ZERO,
///     worker_level: 2,
///     travel_distance_km: None,
///     is_public_holiday_override: None,
/// };
///
/// let result = calculate_pay(&shift, table).unwrap();
/// assert_eq!(result.evening_pay, Decimal::from_str("105.00").unwrap());
/// assert_eq!(result.total_pay, Decimal::from_str("115.50").unwrap());
/// ```
pub fn calculate_pay(shift: &ShiftRecord, table: &RateTable) -> EngineResult<PayCalculationResult> {
    shift.validate()?;

    let mut audit_trace = AuditTrace::default();
    let mut breakdown = Vec::new();

    // Base rate
    let base = get_base_rate(shift.worker_level, table, audit_trace.next_step_number())?;
    audit_trace.steps.push(base.audit_step);
    if let Some(warning) = base.warning {
        audit_trace.warnings.push(warning);
    }
    let base_rate = base.rate;

    // Public holiday
    let on_calendar = table.public_holidays.holiday_on(shift.date);
    let is_public_holiday = shift.is_public_holiday(&table.public_holidays);
    audit_trace.steps.push(AuditStep {
        step_number: audit_trace.next_step_number(),
        rule_id: "public_holiday_check".to_string(),
        rule_name: "Public Holiday Determination".to_string(),
        input: serde_json::json!({
            "date": shift.date.to_string(),
            "override": shift.is_public_holiday_override,
            "calendar_holiday": on_calendar.map(|h| h.name.clone())
        }),
        output: serde_json::json!({
            "is_public_holiday": is_public_holiday
        }),
        reasoning: match (shift.is_public_holiday_override, on_calendar) {
            (Some(true), _) => "Public holiday override set".to_string(),
            (_, Some(holiday)) => format!("{} is {}", shift.date, holiday.name),
            _ => format!("{} is not a public holiday", shift.date),
        },
    });

    // Period split
    let split = split_shift(shift, &table.public_holidays);
    audit_trace.steps.push(AuditStep {
        step_number: audit_trace.next_step_number(),
        rule_id: "time_period_split".to_string(),
        rule_name: "Time Period Split".to_string(),
        input: serde_json::json!({
            "start_time": shift.start_time.format("%H:%M").to_string(),
            "end_time": shift.end_time.format("%H:%M").to_string(),
            "break_unpaid_hours": shift.break_unpaid_hours.to_string()
        }),
        output: serde_json::json!({
            "band": split.band,
            "regular": split.regular.to_string(),
            "evening": split.evening.to_string(),
            "night": split.night.to_string(),
            "weekend": split.weekend.to_string(),
            "public_holiday": split.public_holiday.to_string()
        }),
        reasoning: format!("{} worked hours classified as {}", split.total(), split.band),
    });

    // Hourly lines, in display order
    let weekend_kind = PeriodKind::weekend_for(shift.date);
    let periods = [
        (PeriodKind::Regular, split.regular),
        (PeriodKind::Evening, split.evening),
        (PeriodKind::Night, split.night),
        (weekend_kind, split.weekend),
        (PeriodKind::PublicHoliday, split.public_holiday),
    ];

    let mut amounts = [Decimal::ZERO; 5];
    for (slot, (kind, hours)) in amounts.iter_mut().zip(periods) {
        let period = calculate_period_pay(
            kind,
            hours,
            base_rate,
            &table.penalties,
            audit_trace.next_step_number(),
        );
        audit_trace.steps.push(period.audit_step);
        breakdown.extend(period.line);
        *slot = period.amount;
    }
    let [regular_pay, evening_pay, night_pay, weekend_pay, public_holiday_pay] = amounts;
    let total_penalties = evening_pay + night_pay + weekend_pay + public_holiday_pay;

    // Allowances
    let travel = calculate_travel_allowance(
        shift.travel_distance_km,
        table.allowances.travel_per_km,
        audit_trace.next_step_number(),
    );
    audit_trace.steps.push(travel.audit_step);
    breakdown.extend(travel.line);

    let meal = calculate_meal_allowance(
        split.total(),
        table.allowances.meal,
        audit_trace.next_step_number(),
    );
    audit_trace.steps.push(meal.audit_step);
    breakdown.extend(meal.line);

    let total_allowances = travel.amount + meal.amount;
    let gross_pay = regular_pay + total_penalties + total_allowances;

    // GST
    let gst = apply_gst(gross_pay, table.gst_rate, audit_trace.next_step_number());
    audit_trace.steps.push(gst.audit_step);
    breakdown.push(gst.line);

    audit_trace.warnings.push(AuditWarning {
        code: OVERTIME_NOT_CALCULATED_WARNING.to_string(),
        message: "Overtime is not calculated; overtime hours and pay are reported as zero"
            .to_string(),
        severity: "low".to_string(),
    });

    debug!(
        shift_id = %shift.id,
        award_version = %table.award_version,
        worker_level = base.applied_level,
        gross_pay = %gross_pay,
        total_pay = %gst.total_pay,
        "Calculated shift pay"
    );

    Ok(PayCalculationResult {
        shift_id: shift.id.clone(),
        award_version: table.award_version.clone(),
        applied_worker_level: base.applied_level,
        base_rate,
        regular_hours: split.regular,
        regular_pay,
        evening_hours: split.evening,
        evening_pay,
        night_hours: split.night,
        night_pay,
        weekend_hours: split.weekend,
        weekend_pay,
        public_holiday_hours: split.public_holiday,
        public_holiday_pay,
        overtime_hours: Decimal::ZERO,
        overtime_pay: Decimal::ZERO,
        total_penalties,
        travel_allowance: travel.amount,
        meal_allowance: meal.amount,
        total_allowances,
        gross_pay,
        tax_amount: gst.tax_amount,
        total_pay: gst.total_pay,
        breakdown,
        audit_trace,
    })
}

/// Calculates every shift in a timesheet independently against one table.
///
/// Results keep the input order. The first shift that fails aborts the
/// whole timesheet with its error.
pub fn calculate_timesheet(
    shifts: &[ShiftRecord],
    table: &RateTable,
) -> EngineResult<TimesheetSummary> {
    calculate_timesheet_with(shifts, |_| Ok(table))
}

/// Calculates every shift in a timesheet against the table `resolve` picks
/// for that shift.
///
/// Each shift is priced with its own table, so a timesheet that crosses a
/// rate change uses each table's rates and holiday calendar. A resolver
/// error aborts the timesheet like an invalid shift does.
pub fn calculate_timesheet_with<'a, F>(
    shifts: &[ShiftRecord],
    mut resolve: F,
) -> EngineResult<TimesheetSummary>
where
    F: FnMut(&ShiftRecord) -> EngineResult<&'a RateTable>,
{
    let results = shifts
        .iter()
        .map(|shift| calculate_pay(shift, resolve(shift)?))
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(TimesheetSummary::from_results(results))
}
