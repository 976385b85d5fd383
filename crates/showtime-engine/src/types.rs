//! Domain types shared across the scheduling core.
//!
//! Wire-adjacent structs use camelCase field names so they serialize to the
//! same JSON shapes the back-office REST backend speaks.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::occurrence::WeekdaySet;
use crate::policy::ConflictPolicy;

pub type AuditoriumId = u32;
pub type MovieId = u32;
pub type ScreeningId = u64;

/// A start/end pair of wall-clock times on one calendar date.
///
/// Invariant: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Build a window, rejecting `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::BadInput(format!(
                "time window must start before it ends ({start}..{end})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Half-open overlap test: `self.start < other.end && other.start < self.end`.
    ///
    /// Windows that merely touch (one ends exactly when the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A screening already booked in the backend of record.
///
/// The engine only ever reads these, as a per-auditorium/per-date snapshot
/// fetched once per orchestration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screening {
    pub id: ScreeningId,
    pub auditorium_id: AuditoriumId,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub movie_id: MovieId,
    pub graphics_type: String,
    pub translation_type: String,
}

/// Movie data the scheduler needs: duration for span math, and the
/// graphics/translation types the movie can be shown with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieProfile {
    pub id: MovieId,
    pub title: String,
    pub duration_minutes: u32,
    pub graphics_types: Vec<String>,
    pub translation_types: Vec<String>,
}

/// A recurring bulk-creation request, consumed once by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRequest {
    pub auditorium_id: AuditoriumId,
    pub movie_id: MovieId,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub weekdays: WeekdaySet,
    pub slot_id: u8,
    pub graphics_type: String,
    pub translation_type: String,
    pub conflict_policy: ConflictPolicy,
}

/// A one-off screening request, used when no recurrence is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRequest {
    pub auditorium_id: AuditoriumId,
    pub movie_id: MovieId,
    pub date: NaiveDate,
    pub slot_id: u8,
    pub graphics_type: String,
    pub translation_type: String,
}

/// One candidate screening derived from a bulk request: a date and the
/// duration-exact window it would reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub date: NaiveDate,
    pub window: TimeWindow,
}

/// The creation payload handed to the backend of record.
///
/// `start_time`/`end_time` carry the exact validated values, never slot
/// boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningDraft {
    pub auditorium_id: AuditoriumId,
    pub movie_id: MovieId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub graphics_type: String,
    pub translation_type: String,
}
