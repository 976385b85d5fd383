//! Tests for the daily slot grid.

use chrono::NaiveTime;
use showtime_engine::{ScheduleError, SlotGrid};

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

#[test]
fn standard_grid_has_six_contiguous_slots() {
    let grid = SlotGrid::standard();

    assert_eq!(grid.slot_count(), 6);
    assert_eq!(grid.slot_minutes(), 150);
    assert_eq!(grid.opening(), time(8, 0));
    assert_eq!(grid.closing(), time(23, 0));

    // Each slot ends exactly where the next one starts.
    for pair in grid.slots().windows(2) {
        assert_eq!(
            pair[0].end, pair[1].start,
            "slots {} and {} are not contiguous",
            pair[0].id, pair[1].id
        );
    }
}

#[test]
fn slot_lookup_returns_expected_times() {
    let grid = SlotGrid::standard();

    let first = grid.slot(1).unwrap();
    assert_eq!(first.start, time(8, 0));
    assert_eq!(first.end, time(10, 30));

    let last = grid.slot(6).unwrap();
    assert_eq!(last.start, time(20, 30));
    assert_eq!(last.end, time(23, 0));
}

#[test]
fn slot_ids_outside_the_grid_are_rejected() {
    let grid = SlotGrid::standard();

    assert!(matches!(
        grid.slot(0),
        Err(ScheduleError::InvalidSlot { slot_id: 0 })
    ));
    assert!(matches!(
        grid.slot(7),
        Err(ScheduleError::InvalidSlot { slot_id: 7 })
    ));
}

#[test]
fn custom_grid_parameters_are_honored() {
    // Four 60-minute slots from 09:00 -- a matinee-only configuration.
    let grid = SlotGrid::new(time(9, 0), 60, 4).unwrap();

    assert_eq!(grid.slot_count(), 4);
    assert_eq!(grid.opening(), time(9, 0));
    assert_eq!(grid.closing(), time(13, 0));
    assert_eq!(grid.slot(3).unwrap().start, time(11, 0));
}

#[test]
fn zero_sized_grids_are_rejected() {
    assert!(matches!(
        SlotGrid::new(time(8, 0), 0, 6),
        Err(ScheduleError::BadInput(_))
    ));
    assert!(matches!(
        SlotGrid::new(time(8, 0), 150, 0),
        Err(ScheduleError::BadInput(_))
    ));
}

#[test]
fn grid_running_into_midnight_is_rejected() {
    // 20:00 + 2 x 150 min = 01:00 next day.
    assert!(matches!(
        SlotGrid::new(time(20, 0), 150, 2),
        Err(ScheduleError::BadInput(_))
    ));
    // Ending exactly at midnight is also out: a slot end of 24:00 would wrap.
    assert!(matches!(
        SlotGrid::new(time(22, 0), 60, 2),
        Err(ScheduleError::BadInput(_))
    ));
}

#[test]
fn default_is_the_standard_grid() {
    assert_eq!(SlotGrid::default(), SlotGrid::standard());
}
