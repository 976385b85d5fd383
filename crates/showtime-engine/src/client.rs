//! Collaborator interfaces -- the reads and writes owned by the backend of
//! record.
//!
//! The engine never touches storage or HTTP itself. An authenticated client
//! implementing these traits is passed into the orchestrator explicitly;
//! there is no ambient session or global store lookup.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::types::{AuditoriumId, MovieId, MovieProfile, Screening, ScreeningDraft, ScreeningId};

/// Read side: booked screenings and movie data.
#[async_trait]
pub trait ScheduleDirectory {
    /// The screenings already booked for an auditorium on a date.
    ///
    /// The result is a snapshot: the orchestrator reads it once per run and
    /// never re-checks it afterwards.
    async fn screenings_on(
        &self,
        auditorium_id: AuditoriumId,
        date: NaiveDate,
    ) -> Result<Vec<Screening>>;

    /// A movie's duration and its supported graphics/translation types.
    async fn movie_profile(&self, movie_id: MovieId) -> Result<MovieProfile>;
}

/// Write side: the screening creation endpoint.
#[async_trait]
pub trait ScreeningGateway {
    /// Create one screening, returning its backend id.
    async fn create_screening(&self, draft: &ScreeningDraft) -> Result<ScreeningId>;

    /// Create a batch of screenings in one request, returning their ids in
    /// draft order. On a transport error the caller assumes nothing was
    /// created unless the backend said otherwise.
    async fn create_batch(&self, drafts: &[ScreeningDraft]) -> Result<Vec<ScreeningId>>;
}
