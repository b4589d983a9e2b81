//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;

use crate::domain::entities::{GameSession, GuessRecord, NewGuess, RankingEntry, RecordedGuess};
use crate::domain::value_objects::{RankingEdit, RankingId};
use crate::error::GameResult;

/// Game session repository trait
#[trait_variant::make(GameSessionRepository: Send)]
pub trait LocalGameSessionRepository {
    /// Persist a freshly created session
    async fn create(&self, session: &GameSession) -> GameResult<()>;

    async fn find_by_id(&self, id: GameSessionId) -> GameResult<Option<GameSession>>;

    /// Guess log of a session, oldest first
    async fn list_guesses(&self, id: GameSessionId) -> GameResult<Vec<GuessRecord>>;

    /// Append a guess at the next free sequence number, and on a win also
    /// mark the session completed and insert its ranking entry. All or
    /// nothing.
    ///
    /// The sequence and the win's guess count are taken under the store's
    /// own lock on the session. Fails with `SessionAlreadyCompleted` /
    /// `SessionAbandoned` if the session finished in the meantime.
    async fn record_guess(&self, guess: &NewGuess) -> GameResult<RecordedGuess>;

    /// Mark an open session abandoned
    async fn mark_abandoned(&self, id: GameSessionId, at: DateTime<Utc>) -> GameResult<()>;
}

/// Ranking repository trait
#[trait_variant::make(RankingRepository: Send)]
pub trait LocalRankingRepository {
    /// Best `limit` entries in leaderboard order
    async fn top(&self, limit: u32) -> GameResult<Vec<RankingEntry>>;

    /// All entries, newest first
    async fn list_all(&self) -> GameResult<Vec<RankingEntry>>;

    async fn find(&self, id: RankingId) -> GameResult<Option<RankingEntry>>;

    /// Overwrite an entry; `None` if it does not exist
    async fn update(&self, id: RankingId, edit: &RankingEdit) -> GameResult<Option<RankingEntry>>;

    /// Delete an entry; `false` if it did not exist
    async fn delete(&self, id: RankingId) -> GameResult<bool>;
}
