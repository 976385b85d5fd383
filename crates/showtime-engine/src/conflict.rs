//! Conflict detection -- a candidate window against the screenings already
//! booked in the same auditorium on the same date.
//!
//! Pure and synchronous: the caller supplies the booked screenings as a
//! pre-fetched snapshot. Windows that merely touch (one ends exactly when
//! the other starts) are NOT conflicts.

use serde::{Deserialize, Serialize};

use crate::types::{Occurrence, Screening, TimeWindow};

/// One candidate occurrence with the booked screenings it overlaps
/// (possibly none).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResult {
    pub occurrence: Occurrence,
    pub conflicts_with: Vec<Screening>,
}

impl ConflictResult {
    pub fn is_clean(&self) -> bool {
        self.conflicts_with.is_empty()
    }
}

/// Every booked screening whose window overlaps the candidate under
/// half-open semantics: `candidate.start < booked.end && booked.start <
/// candidate.end`.
pub fn find_conflicts(candidate: &TimeWindow, existing: &[Screening]) -> Vec<Screening> {
    existing
        .iter()
        .filter(|screening| candidate.overlaps(&screening.window))
        .cloned()
        .collect()
}
