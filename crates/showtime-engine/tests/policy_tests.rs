//! Tests for conflict policy resolution and the report shapes.

use chrono::{Datelike, NaiveDate, NaiveTime};
use showtime_engine::{
    resolve, ConflictPolicy, ConflictResult, Occurrence, Screening, TimeWindow,
};

fn occurrence(day: u32) -> Occurrence {
    Occurrence {
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        window: TimeWindow {
            start: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            end: NaiveTime::from_hms_opt(13, 20, 0).unwrap(),
        },
    }
}

fn booked(id: u64, day: u32) -> Screening {
    Screening {
        id,
        auditorium_id: 1,
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        window: TimeWindow {
            start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
        },
        movie_id: 42,
        graphics_type: "2D".to_string(),
        translation_type: "SUB".to_string(),
    }
}

/// Five candidates on Jan 1-5; the 2nd and 4th conflict.
fn five_results_two_conflicting() -> Vec<ConflictResult> {
    (1..=5)
        .map(|day| ConflictResult {
            occurrence: occurrence(day),
            conflicts_with: if day == 2 || day == 4 {
                vec![booked(u64::from(day) * 100, day)]
            } else {
                Vec::new()
            },
        })
        .collect()
}

#[test]
fn fail_policy_aborts_the_whole_batch() {
    let report = resolve(ConflictPolicy::Fail, five_results_two_conflicting());

    assert!(report.aborted);
    assert!(report.created.is_empty());
    assert!(report.skipped.is_empty());

    // Both conflicting occurrences are kept for display, in date order.
    let days: Vec<u32> = report
        .conflicts
        .iter()
        .map(|r| r.occurrence.date.day())
        .collect();
    assert_eq!(days, vec![2, 4]);
}

#[test]
fn skip_policy_keeps_the_clean_subset_in_order() {
    let report = resolve(ConflictPolicy::Skip, five_results_two_conflicting());

    assert!(!report.aborted);
    assert!(report.conflicts.is_empty());

    let created_days: Vec<u32> = report.created.iter().map(|o| o.date.day()).collect();
    assert_eq!(created_days, vec![1, 3, 5]);

    let skipped_days: Vec<u32> = report
        .skipped
        .iter()
        .map(|r| r.occurrence.date.day())
        .collect();
    assert_eq!(skipped_days, vec![2, 4]);
    assert_eq!(report.skipped[0].conflicts_with[0].id, 200);
}

#[test]
fn fail_policy_without_conflicts_accepts_everything() {
    let results: Vec<ConflictResult> = (1..=3)
        .map(|day| ConflictResult {
            occurrence: occurrence(day),
            conflicts_with: Vec::new(),
        })
        .collect();

    let report = resolve(ConflictPolicy::Fail, results);
    assert!(!report.aborted);
    assert_eq!(report.created.len(), 3);
}

#[test]
fn policy_wire_values_are_fail_and_skip() {
    assert_eq!(
        serde_json::to_string(&ConflictPolicy::Fail).unwrap(),
        r#""FAIL""#
    );
    assert_eq!(
        serde_json::from_str::<ConflictPolicy>(r#""SKIP""#).unwrap(),
        ConflictPolicy::Skip
    );

    // Anything else is rejected at the boundary.
    assert!(serde_json::from_str::<ConflictPolicy>(r#""MERGE""#).is_err());
}

#[test]
fn response_flattens_created_occurrences() {
    let report = resolve(ConflictPolicy::Skip, five_results_two_conflicting());
    let response = serde_json::to_value(report.to_response()).unwrap();

    assert_eq!(response["aborted"], false);
    assert_eq!(response["created"].as_array().unwrap().len(), 3);
    assert_eq!(response["created"][0]["date"], "2024-01-01");
    assert_eq!(response["created"][0]["startTime"], "10:30:00");
    assert_eq!(response["created"][0]["endTime"], "13:20:00");

    assert_eq!(response["skipped"][0]["date"], "2024-01-02");
    assert_eq!(response["skipped"][0]["conflictedWith"][0], 200);
}

#[test]
fn aborted_response_reports_conflicts_through_skipped() {
    let report = resolve(ConflictPolicy::Fail, five_results_two_conflicting());
    let response = serde_json::to_value(report.to_response()).unwrap();

    assert_eq!(response["aborted"], true);
    assert!(response["created"].as_array().unwrap().is_empty());

    let skipped = response["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0]["date"], "2024-01-02");
    assert_eq!(skipped[1]["date"], "2024-01-04");
    assert_eq!(skipped[1]["conflictedWith"][0], 400);
}
