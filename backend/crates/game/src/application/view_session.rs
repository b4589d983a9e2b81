//! View Session Use Case

use crate::domain::entities::{GuessRecord, SessionState};
use crate::domain::repository::GameSessionRepository;
use crate::domain::value_objects::Secret;
use crate::error::{GameError, GameResult};
use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Read view of one session
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: GameSessionId,
    pub owner_name: String,
    pub state: SessionState,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Revealed only once the session is finished
    pub answer: Option<Secret>,
    pub guesses: Vec<GuessRecord>,
}

/// View Session Use Case
pub struct ViewSessionUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
}

impl<R> ViewSessionUseCase<R>
where
    R: GameSessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, session_id: GameSessionId) -> GameResult<SessionSnapshot> {
        let session = self
            .repo
            .find_by_id(session_id)
            .await?
            .ok_or(GameError::SessionNotFound)?;
        let guesses = self.repo.list_guesses(session_id).await?;

        let state = session.state();
        Ok(SessionSnapshot {
            session_id,
            owner_name: session.owner_name.into_inner(),
            state,
            started_at: session.started_at,
            finished_at: session.completed_at.or(session.abandoned_at),
            answer: state.is_finished().then_some(session.secret),
            guesses,
        })
    }
}
