//! Domain Entities
//!
//! Core business entities for the game domain.

use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;

use crate::domain::value_objects::{Guess, OwnerName, RankingId, Score, Secret};
use crate::error::{GameError, GameResult};

/// Lifecycle state of a session. `Completed` and `Abandoned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Completed,
    Abandoned,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Open => "open",
            SessionState::Completed => "completed",
            SessionState::Abandoned => "abandoned",
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, SessionState::Open)
    }
}

/// GameSession entity - one attempt at finding a secret
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: GameSessionId,
    pub secret: Secret,
    pub owner_name: OwnerName,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub abandoned_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Create a new open session starting at `started_at`
    pub fn new(secret: Secret, owner_name: OwnerName, started_at: DateTime<Utc>) -> Self {
        Self {
            id: GameSessionId::new(),
            secret,
            owner_name,
            started_at,
            completed_at: None,
            abandoned_at: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.completed_at.is_some() {
            SessionState::Completed
        } else if self.abandoned_at.is_some() {
            SessionState::Abandoned
        } else {
            SessionState::Open
        }
    }

    /// Fail unless the session still accepts guesses, hints and surrender.
    pub fn ensure_open(&self) -> GameResult<()> {
        match self.state() {
            SessionState::Open => Ok(()),
            SessionState::Completed => Err(GameError::SessionAlreadyCompleted),
            SessionState::Abandoned => Err(GameError::SessionAbandoned),
        }
    }

    /// Build the completion for a winning guess recorded at `now`.
    ///
    /// `guess_count` includes the winning guess.
    pub fn complete(&self, now: DateTime<Utc>, guess_count: u32) -> Completion {
        Completion {
            completed_at: now,
            ranking: NewRanking {
                session_id: self.id,
                owner_name: self.owner_name.clone(),
                started_at: self.started_at,
                ended_at: now,
                duration_secs: elapsed_secs(self.started_at, now),
                guess_count,
            },
        }
    }
}

/// Shortest duration a ranking may carry, in seconds.
const MIN_DURATION_SECS: f64 = 0.001;

/// Wall-clock seconds between two instants, millisecond precision.
///
/// Clamped so a ranking never stores a zero or negative duration.
pub fn elapsed_secs(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let millis = (end - start).num_milliseconds();
    (millis as f64 / 1000.0).max(MIN_DURATION_SECS)
}

/// One scored guess in a session's append-only log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub session_id: GameSessionId,
    /// 1-based position in the session's log
    pub sequence: u32,
    pub guess: Guess,
    pub score: Score,
    pub guessed_at: DateTime<Utc>,
}

/// A scored guess before the store places it in the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuess {
    pub session_id: GameSessionId,
    pub guess: Guess,
    pub score: Score,
    pub guessed_at: DateTime<Utc>,
}

impl NewGuess {
    /// Place the guess at `sequence` in `session`'s log. A win also yields
    /// the completion, counting this guess.
    ///
    /// Call with the session's write lock held.
    pub fn place(&self, session: &GameSession, sequence: u32) -> (GuessRecord, Option<Completion>) {
        let record = GuessRecord {
            session_id: self.session_id,
            sequence,
            guess: self.guess,
            score: self.score,
            guessed_at: self.guessed_at,
        };
        let completion = self
            .score
            .is_win()
            .then(|| session.complete(self.guessed_at, sequence));
        (record, completion)
    }
}

/// Outcome of one store write
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedGuess {
    pub record: GuessRecord,
    /// Present only when the guess won
    pub win: Option<RecordedWin>,
}

/// Completion and ranking row written with a winning guess
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWin {
    pub ranking_id: RankingId,
    pub completion: Completion,
}

/// Win finalization written together with the winning guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub completed_at: DateTime<Utc>,
    pub ranking: NewRanking,
}

/// A ranking entry not yet assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewRanking {
    pub session_id: GameSessionId,
    pub owner_name: OwnerName,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub guess_count: u32,
}

/// A stored ranking entry
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub id: RankingId,
    /// Absent for rows whose session was purged
    pub session_id: Option<GameSessionId>,
    pub owner_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub guess_count: u32,
}

impl RankingEntry {
    pub fn from_new(id: RankingId, ranking: &NewRanking) -> Self {
        Self {
            id,
            session_id: Some(ranking.session_id),
            owner_name: ranking.owner_name.as_str().to_string(),
            started_at: ranking.started_at,
            ended_at: ranking.ended_at,
            duration_secs: ranking.duration_secs,
            guess_count: ranking.guess_count,
        }
    }

    /// Leaderboard order: fewer guesses, then faster, then older id.
    pub fn leaderboard_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.guess_count
            .cmp(&other.guess_count)
            .then_with(|| self.duration_secs.total_cmp(&other.duration_secs))
            .then_with(|| self.id.cmp(&other.id))
    }
}
