//! Submit Guess Use Case

use crate::application::session_locks::SessionLocks;
use crate::domain::entities::NewGuess;
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::score;
use crate::domain::value_objects::{Guess, RankingId};
use crate::error::{GameError, GameResult};
use chrono::Utc;
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Input DTO for submit guess
#[derive(Debug, Clone)]
pub struct SubmitGuessInput {
    pub session_id: GameSessionId,
    /// Raw player input, validated here
    pub number: String,
}

/// Output DTO for submit guess
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitGuessOutput {
    pub bulls: u8,
    pub cows: u8,
    pub won: bool,
    /// Present only on a win
    pub result: Option<WinResult>,
}

/// Win statistics
#[derive(Debug, Clone, PartialEq)]
pub struct WinResult {
    pub guess_count: u32,
    pub duration_secs: f64,
    pub ranking_id: RankingId,
}

/// Submit Guess Use Case
pub struct SubmitGuessUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
    locks: SessionLocks,
}

impl<R> SubmitGuessUseCase<R>
where
    R: GameSessionRepository,
{
    pub fn new(repo: Arc<R>, locks: SessionLocks) -> Self {
        Self { repo, locks }
    }

    pub async fn execute(&self, input: SubmitGuessInput) -> GameResult<SubmitGuessOutput> {
        let guess = Guess::parse(&input.number)?;

        let _lease = self.locks.acquire(input.session_id).await;

        let session = self
            .repo
            .find_by_id(input.session_id)
            .await?
            .ok_or(GameError::SessionNotFound)?;
        session.ensure_open()?;

        let score = score(&session.secret, &guess);

        // The store assigns the sequence under its own session lock
        let recorded = self
            .repo
            .record_guess(&NewGuess {
                session_id: session.id,
                guess,
                score,
                guessed_at: Utc::now(),
            })
            .await?;

        tracing::debug!(
            session_id = %session.id,
            sequence = recorded.record.sequence,
            score = %score,
            "Guess recorded"
        );

        let result = recorded.win.map(|win| {
            let ranking = &win.completion.ranking;
            tracing::info!(
                session_id = %session.id,
                guess_count = ranking.guess_count,
                duration_secs = ranking.duration_secs,
                ranking_id = %win.ranking_id,
                "Game won"
            );
            WinResult {
                guess_count: ranking.guess_count,
                duration_secs: ranking.duration_secs,
                ranking_id: win.ranking_id,
            }
        });

        Ok(SubmitGuessOutput {
            bulls: score.bulls,
            cows: score.cows,
            won: score.is_win(),
            result,
        })
    }
}
