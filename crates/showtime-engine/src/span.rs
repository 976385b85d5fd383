//! Span arithmetic -- how many grid slots a screening occupies, and its
//! exact end time.
//!
//! The grid only constrains where a screening may *start*. The reserved
//! window is always duration-exact: a 170-minute feature starting at 08:00
//! ends 10:50, not at the 10:30 or 13:00 slot boundaries.

use chrono::{Duration, NaiveTime};

use crate::error::{Result, ScheduleError};
use crate::grid::SlotGrid;

/// Number of consecutive slots a duration requires: the duration rounded up
/// to the next whole slot, minimum 1.
///
/// # Errors
/// Returns `BadInput` for a zero duration.
pub fn span_count(grid: &SlotGrid, duration_minutes: u32) -> Result<u32> {
    if duration_minutes == 0 {
        return Err(ScheduleError::BadInput(
            "screening duration must be positive".into(),
        ));
    }
    Ok(duration_minutes.div_ceil(grid.slot_minutes()))
}

/// Whether the duration spills into a second slot (`duration > slot length`).
pub fn requires_multiple_slots(grid: &SlotGrid, duration_minutes: u32) -> Result<bool> {
    Ok(span_count(grid, duration_minutes)? > 1)
}

/// Exact arithmetic end of a screening: `start + duration`, never rounded
/// to a slot boundary.
pub fn actual_end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    start + Duration::minutes(i64::from(duration_minutes))
}

/// All slot ids the movie may start in: those where the full span still
/// fits inside the grid. Used to populate the choosable start slots in the
/// scheduling form.
///
/// # Errors
/// Returns `MovieTooLong` when the span exceeds the whole grid, `BadInput`
/// for a zero duration.
pub fn valid_selectable_slots(grid: &SlotGrid, duration_minutes: u32) -> Result<Vec<u8>> {
    let spans = span_count(grid, duration_minutes)?;
    let count = u32::from(grid.slot_count());
    if spans > count {
        return Err(ScheduleError::MovieTooLong {
            duration_minutes,
            spans,
        });
    }
    Ok((1..=grid.slot_count())
        .filter(|&id| u32::from(id) + spans - 1 <= count)
        .collect())
}
