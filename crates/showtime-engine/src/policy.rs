//! Conflict policy resolution -- deciding which occurrences of a batch
//! proceed to creation.
//!
//! Conflicts are data here, never errors: the policy decides whether they
//! abort the whole batch or merely exclude specific dates, and the report
//! keeps the conflicting screenings around for display either way.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::conflict::ConflictResult;
use crate::types::{Occurrence, ScreeningId};

/// Batch-level conflict rule. Arrives on the wire as `"FAIL"` or `"SKIP"`;
/// anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictPolicy {
    /// Any conflict aborts the entire batch; nothing is created.
    Fail,
    /// Conflicting dates are dropped; the clean subset is created.
    Skip,
}

/// The immutable output of one policy resolution.
///
/// `skipped` holds the dates dropped by [`ConflictPolicy::Skip`];
/// `conflicts` holds the offending occurrences of an aborted
/// [`ConflictPolicy::Fail`] run. Both keep their conflicting screening
/// references for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReport {
    pub created: Vec<Occurrence>,
    pub skipped: Vec<ConflictResult>,
    pub conflicts: Vec<ConflictResult>,
    pub aborted: bool,
}

/// Apply a conflict policy to per-date conflict results, given in ascending
/// date order (which both output lists preserve).
pub fn resolve(policy: ConflictPolicy, results: Vec<ConflictResult>) -> BulkReport {
    match policy {
        ConflictPolicy::Fail => {
            let conflicts: Vec<ConflictResult> = results
                .iter()
                .filter(|result| !result.is_clean())
                .cloned()
                .collect();
            if conflicts.is_empty() {
                BulkReport {
                    created: results.into_iter().map(|r| r.occurrence).collect(),
                    skipped: Vec::new(),
                    conflicts: Vec::new(),
                    aborted: false,
                }
            } else {
                BulkReport {
                    created: Vec::new(),
                    skipped: Vec::new(),
                    conflicts,
                    aborted: true,
                }
            }
        }
        ConflictPolicy::Skip => {
            let (clean, skipped): (Vec<ConflictResult>, Vec<ConflictResult>) =
                results.into_iter().partition(ConflictResult::is_clean);
            BulkReport {
                created: clean.into_iter().map(|r| r.occurrence).collect(),
                skipped,
                conflicts: Vec::new(),
                aborted: false,
            }
        }
    }
}

/// One created entry of the wire response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEntry {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One skipped/conflicting entry of the wire response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    pub date: NaiveDate,
    pub conflicted_with: Vec<ScreeningId>,
}

/// The flattened response shape handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResponse {
    pub created: Vec<CreatedEntry>,
    pub skipped: Vec<SkippedEntry>,
    pub aborted: bool,
}

impl BulkReport {
    /// Flatten into the wire response. On an aborted run the conflicting
    /// occurrences surface through `skipped` so the caller can display them.
    pub fn to_response(&self) -> BulkResponse {
        let skipped_source = if self.aborted {
            &self.conflicts
        } else {
            &self.skipped
        };
        BulkResponse {
            created: self
                .created
                .iter()
                .map(|occurrence| CreatedEntry {
                    date: occurrence.date,
                    start_time: occurrence.window.start,
                    end_time: occurrence.window.end,
                })
                .collect(),
            skipped: skipped_source
                .iter()
                .map(|result| SkippedEntry {
                    date: result.occurrence.date,
                    conflicted_with: result.conflicts_with.iter().map(|s| s.id).collect(),
                })
                .collect(),
            aborted: self.aborted,
        }
    }
}
