//! Ranking administration use cases

use std::sync::Arc;

use chrono::{DateTime, Utc};
use game::domain::entities::RankingEntry;
use game::domain::repository::RankingRepository;
use game::domain::value_objects::{RankingEdit, RankingId};

use crate::error::{AdminError, AdminResult};

/// List every ranking entry, newest first
pub struct ListRankingsUseCase<R>
where
    R: RankingRepository,
{
    ranking_repo: Arc<R>,
}

impl<R> ListRankingsUseCase<R>
where
    R: RankingRepository,
{
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }

    pub async fn execute(&self) -> AdminResult<Vec<RankingEntry>> {
        Ok(self.ranking_repo.list_all().await?)
    }
}

/// Correction submitted for one ranking entry
#[derive(Debug, Clone)]
pub struct UpdateRankingInput {
    pub id: RankingId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: f64,
    pub guess_count: u32,
}

/// Validate and apply a ranking correction
pub struct UpdateRankingUseCase<R>
where
    R: RankingRepository,
{
    ranking_repo: Arc<R>,
}

impl<R> UpdateRankingUseCase<R>
where
    R: RankingRepository,
{
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }

    pub async fn execute(&self, input: UpdateRankingInput) -> AdminResult<RankingEntry> {
        let edit = RankingEdit::new(
            &input.name,
            input.start_time,
            input.end_time,
            input.duration,
            input.guess_count,
            Utc::now(),
        )?;

        let entry = self
            .ranking_repo
            .update(input.id, &edit)
            .await?
            .ok_or(AdminError::RankingNotFound)?;

        tracing::info!(
            ranking_id = %entry.id,
            guess_count = entry.guess_count,
            duration_secs = entry.duration_secs,
            "Ranking entry corrected by administrator"
        );

        Ok(entry)
    }
}

/// Remove a ranking entry
pub struct DeleteRankingUseCase<R>
where
    R: RankingRepository,
{
    ranking_repo: Arc<R>,
}

impl<R> DeleteRankingUseCase<R>
where
    R: RankingRepository,
{
    pub fn new(ranking_repo: Arc<R>) -> Self {
        Self { ranking_repo }
    }

    pub async fn execute(&self, id: RankingId) -> AdminResult<()> {
        if !self.ranking_repo.delete(id).await? {
            return Err(AdminError::RankingNotFound);
        }

        tracing::info!(ranking_id = %id, "Ranking entry deleted by administrator");
        Ok(())
    }
}
