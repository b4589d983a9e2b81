//! Surrender Use Case

use crate::application::session_locks::SessionLocks;
use crate::domain::repository::GameSessionRepository;
use crate::domain::value_objects::Secret;
use crate::error::{GameError, GameResult};
use chrono::Utc;
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Output DTO for surrender
#[derive(Debug, Clone)]
pub struct SurrenderOutput {
    pub answer: Secret,
}

/// Surrender Use Case
///
/// Abandons an open session and reveals its secret. Abandoned sessions are
/// never ranked.
pub struct SurrenderUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
    locks: SessionLocks,
}

impl<R> SurrenderUseCase<R>
where
    R: GameSessionRepository,
{
    pub fn new(repo: Arc<R>, locks: SessionLocks) -> Self {
        Self { repo, locks }
    }

    pub async fn execute(&self, session_id: GameSessionId) -> GameResult<SurrenderOutput> {
        let _lease = self.locks.acquire(session_id).await;

        let session = self
            .repo
            .find_by_id(session_id)
            .await?
            .ok_or(GameError::SessionNotFound)?;
        session.ensure_open()?;

        self.repo.mark_abandoned(session_id, Utc::now()).await?;

        tracing::info!(session_id = %session_id, "Game abandoned");

        Ok(SurrenderOutput {
            answer: session.secret,
        })
    }
}
