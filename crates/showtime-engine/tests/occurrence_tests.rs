//! Tests for occurrence generation and the weekday filter.

use chrono::{NaiveDate, Weekday};
use showtime_engine::{expand, ScheduleError, WeekdaySet};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn mondays_and_wednesdays_over_two_weeks() {
    // 2024-01-01 is a Monday.
    let dates = expand(
        date(2024, 1, 1),
        date(2024, 1, 14),
        WeekdaySet::from_days(&[Weekday::Mon, Weekday::Wed]),
    )
    .unwrap();

    assert_eq!(
        dates,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 3),
            date(2024, 1, 8),
            date(2024, 1, 10),
        ]
    );
}

#[test]
fn all_days_preset_yields_every_date() {
    let dates = expand(date(2024, 1, 1), date(2024, 1, 7), WeekdaySet::all_days()).unwrap();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates.first(), Some(&date(2024, 1, 1)));
    assert_eq!(dates.last(), Some(&date(2024, 1, 7)));
}

#[test]
fn weekday_and_weekend_presets_partition_the_week() {
    let weekdays = expand(
        date(2024, 1, 1),
        date(2024, 1, 7),
        WeekdaySet::weekdays_only(),
    )
    .unwrap();
    assert_eq!(weekdays.len(), 5);
    assert_eq!(weekdays.last(), Some(&date(2024, 1, 5)));

    let weekends = expand(
        date(2024, 1, 1),
        date(2024, 1, 7),
        WeekdaySet::weekends_only(),
    )
    .unwrap();
    assert_eq!(weekends, vec![date(2024, 1, 6), date(2024, 1, 7)]);
}

#[test]
fn ninety_days_is_the_accepted_maximum() {
    // Jan 1 through Mar 30, 2024 is exactly 90 days inclusive.
    let dates = expand(date(2024, 1, 1), date(2024, 3, 30), WeekdaySet::all_days()).unwrap();
    assert_eq!(dates.len(), 90);

    // One more day tips the range over the limit.
    assert!(matches!(
        expand(date(2024, 1, 1), date(2024, 3, 31), WeekdaySet::all_days()),
        Err(ScheduleError::DateRangeTooLarge { days: 91 })
    ));
}

#[test]
fn reversed_range_is_rejected() {
    assert!(matches!(
        expand(date(2024, 1, 14), date(2024, 1, 1), WeekdaySet::all_days()),
        Err(ScheduleError::BadInput(_))
    ));
}

#[test]
fn empty_weekday_filter_is_rejected() {
    assert!(matches!(
        expand(date(2024, 1, 1), date(2024, 1, 14), WeekdaySet::empty()),
        Err(ScheduleError::NoDaysSelected)
    ));
}

#[test]
fn single_day_range_respects_the_filter() {
    // 2024-01-03 is a Wednesday.
    let wednesday = WeekdaySet::from_days(&[Weekday::Wed]);
    assert_eq!(
        expand(date(2024, 1, 3), date(2024, 1, 3), wednesday).unwrap(),
        vec![date(2024, 1, 3)]
    );

    let thursday = WeekdaySet::from_days(&[Weekday::Thu]);
    assert!(expand(date(2024, 1, 3), date(2024, 1, 3), thursday)
        .unwrap()
        .is_empty());
}

#[test]
fn weekday_set_serializes_as_codes_monday_first() {
    let set = WeekdaySet::from_days(&[Weekday::Wed, Weekday::Mon]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["MON","WED"]"#);

    let back: WeekdaySet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn weekday_codes_parse_case_insensitively() {
    assert_eq!(WeekdaySet::parse_code("mon"), Some(Weekday::Mon));
    assert_eq!(WeekdaySet::parse_code("SUN"), Some(Weekday::Sun));
    assert_eq!(WeekdaySet::parse_code("noday"), None);

    let err = serde_json::from_str::<WeekdaySet>(r#"["MON","XYZ"]"#);
    assert!(err.is_err(), "unknown codes must be rejected");
}
