//! Error types for scheduling operations.

use thiserror::Error;

/// Errors produced while validating and planning screenings.
///
/// Everything except [`Transport`](ScheduleError::Transport) is a local shape
/// error, resolved before any collaborator write is attempted. Conflicts with
/// booked screenings are not errors at all; they travel as data inside
/// [`BulkReport`](crate::policy::BulkReport).
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Missing or malformed request data (movie, date, policy, window shape).
    #[error("invalid input: {0}")]
    BadInput(String),

    /// Slot id outside the grid.
    #[error("slot {slot_id} is not a valid grid slot")]
    InvalidSlot { slot_id: u8 },

    /// The chosen slot plus the required span runs past the last slot of the day.
    #[error("slot {slot_id} plus a {spans}-slot span runs past the end of the day")]
    SpanOverflow { slot_id: u8, spans: u32 },

    /// The duration needs more slots than the whole grid has.
    #[error("a {duration_minutes}-minute screening needs {spans} slots, more than the grid holds")]
    MovieTooLong { duration_minutes: u32, spans: u32 },

    /// The inclusive date range exceeds the expansion limit.
    #[error("date range spans {days} days, more than the 90-day limit")]
    DateRangeTooLarge { days: i64 },

    /// The weekday filter selects nothing.
    #[error("no weekdays selected")]
    NoDaysSelected,

    /// A collaborator read or the batch submission failed. Nothing is assumed
    /// created unless the backend's response said otherwise.
    #[error("backend request failed: {0}")]
    Transport(String),
}

/// Convenience alias used throughout showtime-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
