//! Request Hint Use Case

use crate::domain::hint::{HintSummary, infer_hints};
use crate::domain::repository::GameSessionRepository;
use crate::error::{GameError, GameResult};
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Request Hint Use Case
///
/// Read-only; does not take the session lease.
pub struct RequestHintUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
}

impl<R> RequestHintUseCase<R>
where
    R: GameSessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, session_id: GameSessionId) -> GameResult<HintSummary> {
        let session = self
            .repo
            .find_by_id(session_id)
            .await?
            .ok_or(GameError::SessionNotFound)?;
        session.ensure_open()?;

        let history = self.repo.list_guesses(session_id).await?;
        let summary = infer_hints(&history);

        tracing::debug!(
            session_id = %session_id,
            guesses = summary.guesses_analyzed,
            confirmed = summary.confirmed.len(),
            eliminated = summary.eliminated.len(),
            "Hint computed"
        );

        Ok(summary)
    }
}
