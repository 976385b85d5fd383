//! # showtime-engine
//!
//! Showtime slot scheduling core for a cinema back-office.
//!
//! Screenings are assigned to a fixed daily grid of equal-length slots. The
//! engine computes how many consecutive slots a movie occupies, validates
//! that the occupied span stays inside the operating day, expands a date
//! range plus weekday filter into concrete occurrences, detects time-window
//! conflicts against already-booked screenings, and drives the whole
//! request → decision → submission pipeline for recurring bulk creation.
//!
//! Storage, HTTP transport, and authentication stay outside: the engine
//! reads booked screenings and movie profiles through the [`client`] traits
//! and hands creation payloads back through them.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use showtime_engine::{expand, validate_slot_choice, SlotGrid, WeekdaySet};
//!
//! let grid = SlotGrid::standard();
//!
//! // A 170-minute feature starting in slot 2 reserves 10:30-13:20,
//! // duration-exact, not rounded to the slot boundary at 13:30.
//! let window = validate_slot_choice(&grid, 2, 170).unwrap();
//! assert_eq!(window.start.to_string(), "10:30:00");
//! assert_eq!(window.end.to_string(), "13:20:00");
//!
//! // Mondays and Wednesdays over two weeks -> four occurrences.
//! let dates = expand(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
//!     WeekdaySet::from_days(&[Weekday::Mon, Weekday::Wed]),
//! )
//! .unwrap();
//! assert_eq!(dates.len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — the configurable daily slot grid
//! - [`span`] — slot span and exact end-time arithmetic
//! - [`validate`] — the authoritative "can this movie start in this slot" gate
//! - [`occurrence`] — date-range + weekday-filter expansion
//! - [`conflict`] — time-window overlap against booked screenings
//! - [`policy`] — fail-fast vs. skip-and-continue batch resolution
//! - [`orchestrator`] — the bulk creation state machine
//! - [`client`] — collaborator interfaces (reads and writes)
//! - [`types`] — shared domain types
//! - [`error`] — error types

pub mod client;
pub mod conflict;
pub mod error;
pub mod grid;
pub mod occurrence;
pub mod orchestrator;
pub mod policy;
pub mod span;
pub mod types;
pub mod validate;

pub use client::{ScheduleDirectory, ScreeningGateway};
pub use conflict::{find_conflicts, ConflictResult};
pub use error::ScheduleError;
pub use grid::{Slot, SlotGrid};
pub use occurrence::{expand, WeekdaySet, MAX_RANGE_DAYS};
pub use orchestrator::{BulkOrchestrator, BulkOutcome, RunState, SingleOutcome};
pub use policy::{resolve, BulkReport, BulkResponse, ConflictPolicy};
pub use span::{
    actual_end_time, requires_multiple_slots, span_count, valid_selectable_slots,
};
pub use types::{
    BulkRequest, MovieProfile, Occurrence, Screening, ScreeningDraft, SingleRequest, TimeWindow,
};
pub use validate::validate_slot_choice;
