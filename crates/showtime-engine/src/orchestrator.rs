//! Bulk creation orchestration -- one request → decision → submission run.
//!
//! The pipeline is an explicit state machine,
//! `Idle → Validating → (ConflictDetected | Ready) → Submitting → Done | Failed`,
//! with the transition relation exposed as a pure function so it can be
//! tested without any UI harness. Local shape failures and transport
//! failures both surface as the `Err` arm (the `Failed` state);
//! `ConflictDetected` and `Done` are the `Ok` terminals.
//!
//! The booked-screenings snapshot is advisory: it is read once per run and
//! never re-checked before submission, so a screening created by another
//! actor in between can slip past the pre-filter. The backend answering the
//! batch-create call stays the final arbiter of what actually exists.

use tracing::{info, warn};

use crate::client::{ScheduleDirectory, ScreeningGateway};
use crate::conflict::{self, ConflictResult};
use crate::error::{Result, ScheduleError};
use crate::grid::SlotGrid;
use crate::occurrence;
use crate::policy::{self, BulkReport};
use crate::span;
use crate::types::{
    BulkRequest, MovieId, MovieProfile, Occurrence, Screening, ScreeningDraft, ScreeningId,
    SingleRequest,
};
use crate::validate::validate_slot_choice;

/// The states of one bulk creation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Validating,
    /// Terminal: the conflict policy aborted the batch; nothing was submitted.
    ConflictDetected,
    Ready,
    Submitting,
    /// Terminal: the batch was submitted and confirmed.
    Done,
    /// Terminal: a shape error or transport failure ended the run.
    Failed,
}

impl RunState {
    /// The legal transition relation of the pipeline.
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Ready)
                | (Validating, ConflictDetected)
                | (Validating, Failed)
                | (Ready, Submitting)
                | (Submitting, Done)
                | (Submitting, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::ConflictDetected | RunState::Done | RunState::Failed
        )
    }
}

fn advance(state: &mut RunState, next: RunState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal state transition {state:?} -> {next:?}"
    );
    *state = next;
}

/// The result of one completed bulk run.
///
/// `state` is the terminal state reached (`Done` or `ConflictDetected`;
/// failures are the `Err` arm of [`BulkOrchestrator::run`]). `created_ids`
/// are the backend ids of the submitted screenings, in `report.created`
/// order, empty when nothing was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOutcome {
    pub state: RunState,
    pub report: BulkReport,
    pub created_ids: Vec<ScreeningId>,
}

/// The result of one single-screening run. `created` is `None` when the
/// window conflicted and nothing was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleOutcome {
    pub draft: ScreeningDraft,
    pub created: Option<ScreeningId>,
    pub conflicts: Vec<Screening>,
}

/// Composes grid, span, occurrence, conflict, and policy into the bulk
/// creation pipeline, against injected backend clients.
pub struct BulkOrchestrator<'a, D, G> {
    grid: SlotGrid,
    directory: &'a D,
    gateway: &'a G,
}

impl<'a, D, G> BulkOrchestrator<'a, D, G>
where
    D: ScheduleDirectory,
    G: ScreeningGateway,
{
    pub fn new(grid: SlotGrid, directory: &'a D, gateway: &'a G) -> Self {
        Self {
            grid,
            directory,
            gateway,
        }
    }

    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Steps 1-4 of the pipeline: validate the request, expand the
    /// occurrences, conflict-check each date against its snapshot, and
    /// resolve the conflict policy. No write is attempted.
    pub async fn plan(&self, request: &BulkRequest) -> Result<BulkReport> {
        // Purely local shape checks run before any collaborator read.
        self.grid.slot(request.slot_id)?;
        let dates = occurrence::expand(request.date_from, request.date_to, request.weekdays)?;

        let profile = self.directory.movie_profile(request.movie_id).await?;
        ensure_supported(&profile, &request.graphics_type, &request.translation_type)?;
        let window = validate_slot_choice(&self.grid, request.slot_id, profile.duration_minutes)?;
        info!(
            movie = profile.id,
            auditorium = request.auditorium_id,
            candidates = dates.len(),
            "validated bulk request"
        );

        let mut results = Vec::with_capacity(dates.len());
        for date in dates {
            let existing = self
                .directory
                .screenings_on(request.auditorium_id, date)
                .await?;
            let conflicts_with = conflict::find_conflicts(&window, &existing);
            if !conflicts_with.is_empty() {
                warn!(
                    %date,
                    count = conflicts_with.len(),
                    "candidate window overlaps booked screenings"
                );
            }
            results.push(ConflictResult {
                occurrence: Occurrence { date, window },
                conflicts_with,
            });
        }

        Ok(policy::resolve(request.conflict_policy, results))
    }

    /// The full pipeline: [`plan`](Self::plan), then -- unless the policy
    /// aborted -- one batch submission of the accepted occurrences.
    pub async fn run(&self, request: &BulkRequest) -> Result<BulkOutcome> {
        let mut state = RunState::Idle;
        advance(&mut state, RunState::Validating);

        let report = self.plan(request).await?;

        if report.aborted {
            advance(&mut state, RunState::ConflictDetected);
            info!(
                conflicts = report.conflicts.len(),
                "bulk request aborted on conflict"
            );
            return Ok(BulkOutcome {
                state,
                report,
                created_ids: Vec::new(),
            });
        }

        advance(&mut state, RunState::Ready);
        let drafts: Vec<ScreeningDraft> = report
            .created
            .iter()
            .map(|occurrence| draft_for(request, occurrence))
            .collect();

        advance(&mut state, RunState::Submitting);
        let created_ids = if drafts.is_empty() {
            Vec::new()
        } else {
            self.gateway.create_batch(&drafts).await?
        };
        advance(&mut state, RunState::Done);
        info!(
            created = created_ids.len(),
            skipped = report.skipped.len(),
            "bulk creation submitted"
        );

        Ok(BulkOutcome {
            state,
            report,
            created_ids,
        })
    }

    /// The non-recurring path: validate one date, conflict-check it, and
    /// submit iff the window is free.
    pub async fn run_single(&self, request: &SingleRequest) -> Result<SingleOutcome> {
        self.grid.slot(request.slot_id)?;
        let profile = self.directory.movie_profile(request.movie_id).await?;
        ensure_supported(&profile, &request.graphics_type, &request.translation_type)?;
        let window = validate_slot_choice(&self.grid, request.slot_id, profile.duration_minutes)?;

        let existing = self
            .directory
            .screenings_on(request.auditorium_id, request.date)
            .await?;
        let conflicts = conflict::find_conflicts(&window, &existing);
        let draft = ScreeningDraft {
            auditorium_id: request.auditorium_id,
            movie_id: request.movie_id,
            date: request.date,
            start_time: window.start,
            end_time: window.end,
            graphics_type: request.graphics_type.clone(),
            translation_type: request.translation_type.clone(),
        };

        if !conflicts.is_empty() {
            warn!(
                date = %request.date,
                count = conflicts.len(),
                "single screening conflicts, nothing submitted"
            );
            return Ok(SingleOutcome {
                draft,
                created: None,
                conflicts,
            });
        }

        let id = self.gateway.create_screening(&draft).await?;
        Ok(SingleOutcome {
            draft,
            created: Some(id),
            conflicts: Vec::new(),
        })
    }

    /// The slot ids a movie may start in, for populating the scheduling
    /// form's slot choices.
    pub async fn selectable_slots_for_movie(&self, movie_id: MovieId) -> Result<Vec<u8>> {
        let profile = self.directory.movie_profile(movie_id).await?;
        span::valid_selectable_slots(&self.grid, profile.duration_minutes)
    }
}

fn ensure_supported(profile: &MovieProfile, graphics: &str, translation: &str) -> Result<()> {
    if !profile.graphics_types.iter().any(|g| g == graphics) {
        return Err(ScheduleError::BadInput(format!(
            "movie {} does not support graphics type {graphics:?}",
            profile.id
        )));
    }
    if !profile.translation_types.iter().any(|t| t == translation) {
        return Err(ScheduleError::BadInput(format!(
            "movie {} does not support translation type {translation:?}",
            profile.id
        )));
    }
    Ok(())
}

fn draft_for(request: &BulkRequest, occurrence: &Occurrence) -> ScreeningDraft {
    ScreeningDraft {
        auditorium_id: request.auditorium_id,
        movie_id: request.movie_id,
        date: occurrence.date,
        start_time: occurrence.window.start,
        end_time: occurrence.window.end,
        graphics_type: request.graphics_type.clone(),
        translation_type: request.translation_type.clone(),
    }
}
