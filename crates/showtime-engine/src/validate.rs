//! Slot choice validation -- the single authoritative gate for "can this
//! movie start in this slot".
//!
//! Every conflict check and every submission runs through here first; the
//! window it returns is what gets reserved and what gets conflict-checked.

use crate::error::{Result, ScheduleError};
use crate::grid::SlotGrid;
use crate::span;
use crate::types::TimeWindow;

/// Validate a starting slot against a duration and return the reserved
/// window: the slot's start paired with the duration-exact end time.
///
/// Checks run in a fixed order so each failure maps to one cause:
/// zero duration (`BadInput`), unknown slot (`InvalidSlot`), span larger
/// than the grid (`MovieTooLong`), span past the last slot (`SpanOverflow`).
pub fn validate_slot_choice(
    grid: &SlotGrid,
    slot_id: u8,
    duration_minutes: u32,
) -> Result<TimeWindow> {
    if duration_minutes == 0 {
        return Err(ScheduleError::BadInput(
            "screening duration must be positive".into(),
        ));
    }
    let slot = grid.slot(slot_id)?;
    let spans = span::span_count(grid, duration_minutes)?;
    let count = u32::from(grid.slot_count());
    if spans > count {
        return Err(ScheduleError::MovieTooLong {
            duration_minutes,
            spans,
        });
    }
    if u32::from(slot_id) + spans - 1 > count {
        return Err(ScheduleError::SpanOverflow { slot_id, spans });
    }
    TimeWindow::new(slot.start, span::actual_end_time(slot.start, duration_minutes))
}
