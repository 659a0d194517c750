//! Property tests for shift pay calculation.
//!
//! Shifts are generated on a quarter-hour grid so every hour value is exact.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;

use schads_engine::calculation::{calculate_pay, split_time_periods};
use schads_engine::config::{ConfigLoader, RateTable};
use schads_engine::models::{BreakdownCategory, PayCalculationResult, ShiftRecord};

fn rate_table() -> RateTable {
    let loader = ConfigLoader::load("./config/schads").expect("Failed to load config");
    loader
        .rate_table("2025-07-01")
        .expect("2025-07-01 table")
        .clone()
}

fn quarter_hours(quarters: u32) -> Decimal {
    Decimal::new(i64::from(quarters) * 25, 2)
}

fn time_of_quarter(quarter: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(quarter / 4, (quarter % 4) * 15, 0).unwrap()
}

/// A valid shift: any start, 15 minutes to 23h45 long, break shorter than the shift.
fn shift_strategy() -> impl Strategy<Value = ShiftRecord> {
    (0u64..365, 0u32..96, 1u32..96, 1u8..=5, proptest::option::of(0u32..4000))
        .prop_flat_map(|(day, start_q, duration_q, level, distance)| {
            (
                Just(day),
                Just(start_q),
                Just(duration_q),
                0u32..duration_q,
                Just(level),
                Just(distance),
            )
        })
        .prop_map(|(day, start_q, duration_q, break_q, level, distance)| ShiftRecord {
            id: "prop_shift".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 1)
                .unwrap()
                .checked_add_days(Days::new(day))
                .unwrap(),
            start_time: time_of_quarter(start_q),
            end_time: time_of_quarter((start_q + duration_q) % 96),
            break_unpaid_hours: quarter_hours(break_q),
            worker_level: level,
            travel_distance_km: distance.map(|tenths| Decimal::new(i64::from(tenths), 1)),
            is_public_holiday_override: None,
        })
}

fn line_rank(description: &str) -> usize {
    match description {
        "Regular hours" => 0,
        "Evening hours" => 1,
        "Night hours" => 2,
        "Saturday hours" | "Sunday hours" => 3,
        "Public holiday hours" => 4,
        d if d.starts_with("Travel allowance") => 5,
        "Meal allowance" => 6,
        d if d.starts_with("GST") => 7,
        _ => usize::MAX,
    }
}

fn category_hours(result: &PayCalculationResult) -> [Decimal; 5] {
    [
        result.regular_hours,
        result.evening_hours,
        result.night_hours,
        result.weekend_hours,
        result.public_holiday_hours,
    ]
}

proptest! {
    #[test]
    fn prop_category_hours_sum_to_worked_hours(shift in shift_strategy()) {
        let split = split_time_periods(
            shift.date,
            shift.start_time,
            shift.end_time,
            shift.break_unpaid_hours,
            false,
        );
        prop_assert_eq!(split.total(), shift.worked_hours());
        prop_assert!(split.regular >= Decimal::ZERO);
        prop_assert!(split.evening >= Decimal::ZERO);
        prop_assert!(split.night >= Decimal::ZERO);
        prop_assert!(split.weekend >= Decimal::ZERO);
        prop_assert!(split.public_holiday >= Decimal::ZERO);

        let result = calculate_pay(&shift, &rate_table()).unwrap();
        prop_assert_eq!(result.total_hours(), shift.worked_hours());
    }

    #[test]
    fn prop_public_holiday_override_takes_every_hour(mut shift in shift_strategy()) {
        shift.is_public_holiday_override = Some(true);
        let result = calculate_pay(&shift, &rate_table()).unwrap();

        prop_assert_eq!(result.public_holiday_hours, shift.worked_hours());
        let [regular, evening, night, weekend, _] = category_hours(&result);
        prop_assert_eq!(regular, Decimal::ZERO);
        prop_assert_eq!(evening, Decimal::ZERO);
        prop_assert_eq!(night, Decimal::ZERO);
        prop_assert_eq!(weekend, Decimal::ZERO);
    }

    #[test]
    fn prop_weekend_takes_every_hour(
        mut shift in shift_strategy(),
        week in 0u64..52,
        sunday in any::<bool>(),
    ) {
        // 2025-07-05 is a Saturday
        shift.date = NaiveDate::from_ymd_opt(2025, 7, 5)
            .unwrap()
            .checked_add_days(Days::new(week * 7 + u64::from(sunday)))
            .unwrap();
        let table = rate_table();
        prop_assume!(!table.public_holidays.is_public_holiday(shift.date));

        let result = calculate_pay(&shift, &table).unwrap();
        prop_assert_eq!(result.weekend_hours, shift.worked_hours());
        prop_assert_eq!(result.regular_hours + result.evening_hours + result.night_hours, Decimal::ZERO);

        let expected = if sunday { Weekday::Sun } else { Weekday::Sat };
        prop_assert_eq!(shift.date.weekday(), expected);
    }

    #[test]
    fn prop_total_is_gross_plus_ten_percent(shift in shift_strategy()) {
        let result = calculate_pay(&shift, &rate_table()).unwrap();

        prop_assert_eq!(result.total_pay, result.gross_pay + result.tax_amount);
        prop_assert_eq!(
            result.total_pay.round_dp(2),
            (result.gross_pay * Decimal::new(110, 2)).round_dp(2)
        );
        prop_assert_eq!(
            result.gross_pay,
            result.regular_pay + result.total_penalties + result.total_allowances
        );
    }

    #[test]
    fn prop_breakdown_in_fixed_order_without_zero_lines(shift in shift_strategy()) {
        let result = calculate_pay(&shift, &rate_table()).unwrap();
        let ranks: Vec<usize> = result
            .breakdown
            .iter()
            .map(|line| line_rank(&line.description))
            .collect();

        prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]), "out of order: {:?}", ranks);

        let last = result.breakdown.last().unwrap();
        prop_assert_eq!(last.category, BreakdownCategory::Tax);

        for line in &result.breakdown[..result.breakdown.len() - 1] {
            prop_assert!(line.amount > Decimal::ZERO, "zero line: {}", line.description);
        }
    }

    #[test]
    fn prop_calculation_is_idempotent(shift in shift_strategy()) {
        let table = rate_table();
        let first = calculate_pay(&shift, &table).unwrap();
        let second = calculate_pay(&shift, &table).unwrap();
        prop_assert_eq!(first, second);
    }
}
