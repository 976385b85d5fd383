//! The daily slot grid -- equal-length slots tiling the operating day.
//!
//! The grid is configuration, not a hardcoded constant: slot length, slot
//! count, and the opening time are all construction parameters, so a change
//! of operating hours never touches the scheduling algorithms.
//! [`SlotGrid::standard`] gives the canonical cinema grid of six 150-minute
//! slots covering 08:00-23:00 contiguously.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// One grid cell. Ids are 1-based; `slot[i].end == slot[i+1].start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: u8,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// The immutable slot table for one operating day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    slot_minutes: u32,
    // Non-empty by construction; slot with id `n` sits at index `n - 1`.
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Build a grid of `slot_count` slots of `slot_minutes` each, starting
    /// at `day_start`.
    ///
    /// # Errors
    /// Returns `BadInput` for zero sizes, a start time not on a whole
    /// minute, or a grid that would run to midnight or beyond.
    pub fn new(day_start: NaiveTime, slot_minutes: u32, slot_count: u8) -> Result<Self> {
        if slot_minutes == 0 {
            return Err(ScheduleError::BadInput(
                "slot length must be positive".into(),
            ));
        }
        if slot_minutes > 24 * 60 {
            return Err(ScheduleError::BadInput(
                "slot length must fit within one day".into(),
            ));
        }
        if slot_count == 0 {
            return Err(ScheduleError::BadInput(
                "grid must have at least one slot".into(),
            ));
        }
        if day_start.num_seconds_from_midnight() % 60 != 0 {
            return Err(ScheduleError::BadInput(
                "grid must open on a whole minute".into(),
            ));
        }

        let open_minute = day_start.num_seconds_from_midnight() / 60;
        let slots = (0..u32::from(slot_count))
            .map(|i| {
                let start = minute_of_day(open_minute + i * slot_minutes)?;
                let end = minute_of_day(open_minute + (i + 1) * slot_minutes)?;
                Ok(Slot {
                    id: i as u8 + 1,
                    start,
                    end,
                })
            })
            .collect::<Result<Vec<Slot>>>()?;

        Ok(Self {
            slot_minutes,
            slots,
        })
    }

    /// The canonical grid: six 150-minute slots from 08:00 to 23:00.
    pub fn standard() -> Self {
        let opening = NaiveTime::from_hms_opt(8, 0, 0).expect("08:00 is a valid time");
        Self::new(opening, 150, 6).expect("standard grid parameters are valid")
    }

    /// Look up a slot by its 1-based id.
    ///
    /// # Errors
    /// Returns `InvalidSlot` for ids outside `1..=slot_count`.
    pub fn slot(&self, id: u8) -> Result<Slot> {
        if id == 0 || usize::from(id) > self.slots.len() {
            return Err(ScheduleError::InvalidSlot { slot_id: id });
        }
        Ok(self.slots[usize::from(id) - 1])
    }

    /// All slots, ascending by id.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> u8 {
        self.slots.len() as u8
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    /// Opening time of the day (start of slot 1).
    pub fn opening(&self) -> NaiveTime {
        self.slots[0].start
    }

    /// Closing time of the day (end of the last slot).
    pub fn closing(&self) -> NaiveTime {
        self.slots[self.slots.len() - 1].end
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whole-minute offset from midnight as a `NaiveTime`.
///
/// Fails for offsets at or past 24:00 -- the operating day must end before
/// midnight so a slot's end never wraps to the next date.
fn minute_of_day(minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0)
        .ok_or_else(|| ScheduleError::BadInput("slot grid runs past midnight".into()))
}
