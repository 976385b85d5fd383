//! Offline collaborators for the CLI -- a repertory snapshot file standing
//! in for the backend directory, and an in-process gateway that records what
//! gets created.

use std::sync::{Mutex, MutexGuard};

use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use showtime_engine::error::Result as EngineResult;
use showtime_engine::{
    MovieProfile, ScheduleDirectory, ScheduleError, Screening, ScreeningDraft, ScreeningGateway,
};

/// The snapshot file: movies on the program plus the screenings already
/// booked. Read once, then served to the orchestrator as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repertory {
    #[serde(default)]
    pub movies: Vec<MovieProfile>,
    #[serde(default)]
    pub screenings: Vec<Screening>,
}

impl Repertory {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read repertory file: {path}"))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse repertory file: {path}"))
    }
}

#[async_trait]
impl ScheduleDirectory for Repertory {
    async fn screenings_on(
        &self,
        auditorium_id: u32,
        date: NaiveDate,
    ) -> EngineResult<Vec<Screening>> {
        Ok(self
            .screenings
            .iter()
            .filter(|s| s.auditorium_id == auditorium_id && s.date == date)
            .cloned()
            .collect())
    }

    async fn movie_profile(&self, movie_id: u32) -> EngineResult<MovieProfile> {
        self.movies
            .iter()
            .find(|m| m.id == movie_id)
            .cloned()
            .ok_or_else(|| {
                ScheduleError::BadInput(format!("movie {movie_id} is not in the repertory"))
            })
    }
}

/// Accepts every draft, assigning sequential ids.
#[derive(Default)]
pub struct RecordingGateway {
    created: Mutex<Vec<ScreeningDraft>>,
}

impl RecordingGateway {
    fn lock(&self) -> EngineResult<MutexGuard<'_, Vec<ScreeningDraft>>> {
        self.created
            .lock()
            .map_err(|_| ScheduleError::Transport("gateway state poisoned".into()))
    }
}

#[async_trait]
impl ScreeningGateway for RecordingGateway {
    async fn create_screening(&self, draft: &ScreeningDraft) -> EngineResult<u64> {
        let mut created = self.lock()?;
        created.push(draft.clone());
        Ok(created.len() as u64)
    }

    async fn create_batch(&self, drafts: &[ScreeningDraft]) -> EngineResult<Vec<u64>> {
        let mut created = self.lock()?;
        let first = created.len() as u64;
        created.extend_from_slice(drafts);
        Ok((first + 1..=first + drafts.len() as u64).collect())
    }
}
