//! In-memory Repository Implementation
//!
//! Backs tests and database-less runs. One `RwLock` guards all tables, so
//! every write is atomic with respect to readers.

use crate::domain::entities::{
    GameSession, GuessRecord, NewGuess, RankingEntry, RecordedGuess, RecordedWin,
};
use crate::domain::repository::{GameSessionRepository, RankingRepository};
use crate::domain::value_objects::{RankingEdit, RankingId};
use crate::error::{GameError, GameResult};
use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    sessions: HashMap<GameSessionId, GameSession>,
    guesses: HashMap<GameSessionId, Vec<GuessRecord>>,
    rankings: BTreeMap<RankingId, RankingEntry>,
    next_ranking_id: i64,
}

impl Tables {
    fn open_session_mut(&mut self, id: GameSessionId) -> GameResult<&mut GameSession> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(GameError::SessionNotFound)?;
        session.ensure_open()?;
        Ok(session)
    }
}

/// In-memory repository; clones share state
#[derive(Debug, Clone, Default)]
pub struct MemoryGameRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameSessionRepository for MemoryGameRepository {
    async fn create(&self, session: &GameSession) -> GameResult<()> {
        let mut tables = self.tables.write().await;
        if tables.sessions.contains_key(&session.id) {
            return Err(GameError::Internal(format!(
                "session {} already exists",
                session.id
            )));
        }
        tables.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: GameSessionId) -> GameResult<Option<GameSession>> {
        Ok(self.tables.read().await.sessions.get(&id).cloned())
    }

    async fn list_guesses(&self, id: GameSessionId) -> GameResult<Vec<GuessRecord>> {
        Ok(self
            .tables
            .read()
            .await
            .guesses
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }

    async fn record_guess(&self, guess: &NewGuess) -> GameResult<RecordedGuess> {
        let mut tables = self.tables.write().await;
        let tables = &mut *tables;

        // Field-level borrows: the session, log and rankings are updated together
        let session = tables
            .sessions
            .get_mut(&guess.session_id)
            .ok_or(GameError::SessionNotFound)?;
        session.ensure_open()?;

        let log = tables.guesses.entry(guess.session_id).or_default();
        let (record, completion) = guess.place(session, log.len() as u32 + 1);

        let win = completion.map(|completion| {
            session.completed_at = Some(completion.completed_at);
            tables.next_ranking_id += 1;
            let ranking_id = RankingId(tables.next_ranking_id);
            tables
                .rankings
                .insert(ranking_id, RankingEntry::from_new(ranking_id, &completion.ranking));
            RecordedWin {
                ranking_id,
                completion,
            }
        });

        log.push(record.clone());
        Ok(RecordedGuess { record, win })
    }

    async fn mark_abandoned(&self, id: GameSessionId, at: DateTime<Utc>) -> GameResult<()> {
        let mut tables = self.tables.write().await;
        tables.open_session_mut(id)?.abandoned_at = Some(at);
        Ok(())
    }
}

impl RankingRepository for MemoryGameRepository {
    async fn top(&self, limit: u32) -> GameResult<Vec<RankingEntry>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<RankingEntry> = tables.rankings.values().cloned().collect();
        entries.sort_by(RankingEntry::leaderboard_cmp);
        entries.truncate(limit as usize);
        Ok(entries)
    }

    async fn list_all(&self) -> GameResult<Vec<RankingEntry>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<RankingEntry> = tables.rankings.values().cloned().collect();
        entries.sort_by(|a, b| b.ended_at.cmp(&a.ended_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn find(&self, id: RankingId) -> GameResult<Option<RankingEntry>> {
        Ok(self.tables.read().await.rankings.get(&id).cloned())
    }

    async fn update(&self, id: RankingId, edit: &RankingEdit) -> GameResult<Option<RankingEntry>> {
        let mut tables = self.tables.write().await;
        let Some(entry) = tables.rankings.get_mut(&id) else {
            return Ok(None);
        };

        entry.owner_name = edit.name.as_str().to_string();
        entry.started_at = edit.started_at;
        entry.ended_at = edit.ended_at;
        entry.duration_secs = edit.duration_secs;
        entry.guess_count = edit.guess_count;
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: RankingId) -> GameResult<bool> {
        Ok(self.tables.write().await.rankings.remove(&id).is_some())
    }
}
