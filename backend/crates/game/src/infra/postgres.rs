//! PostgreSQL Repository Implementations

use crate::domain::entities::{
    GameSession, GuessRecord, NewGuess, RankingEntry, RecordedGuess, RecordedWin,
};
use crate::domain::repository::{GameSessionRepository, RankingRepository};
use crate::domain::value_objects::{Guess, OwnerName, RankingEdit, RankingId, Score, Secret};
use crate::error::{GameError, GameResult};
use chrono::{DateTime, Utc};
use kernel::id::GameSessionId;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SESSION_COLUMNS: &str =
    "game_session_id, secret, owner_name, started_at, completed_at, abandoned_at";

/// Lock the session row for the rest of the transaction and fail unless it
/// is still open. Serializes writers across server processes.
async fn lock_open_session(conn: &mut PgConnection, id: Uuid) -> GameResult<GameSession> {
    let row = sqlx::query_as::<_, GameSessionRow>(&format!(
        "SELECT {SESSION_COLUMNS} FROM game_sessions WHERE game_session_id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;

    let session = row
        .ok_or(GameError::SessionNotFound)?
        .into_session()?;
    session.ensure_open()?;
    Ok(session)
}

impl GameSessionRepository for PgGameRepository {
    async fn create(&self, session: &GameSession) -> GameResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_sessions (
                game_session_id,
                secret,
                owner_name,
                started_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.id.into_uuid())
        .bind(session.secret.to_string())
        .bind(session.owner_name.as_str())
        .bind(session.started_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: GameSessionId) -> GameResult<Option<GameSession>> {
        let row = sqlx::query_as::<_, GameSessionRow>(&format!(
            "SELECT {SESSION_COLUMNS} FROM game_sessions WHERE game_session_id = $1"
        ))
        .bind(id.into_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(GameSessionRow::into_session).transpose()
    }

    async fn list_guesses(&self, id: GameSessionId) -> GameResult<Vec<GuessRecord>> {
        let rows = sqlx::query_as::<_, GuessRow>(
            r#"
            SELECT
                game_session_id,
                guess_seq,
                guess,
                bulls,
                cows,
                guessed_at
            FROM game_guesses
            WHERE game_session_id = $1
            ORDER BY guess_seq
            "#,
        )
        .bind(id.into_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(GuessRow::into_record).collect()
    }

    async fn record_guess(&self, guess: &NewGuess) -> GameResult<RecordedGuess> {
        let session_id = guess.session_id.into_uuid();
        let mut tx = self.pool.begin().await?;

        let session = lock_open_session(&mut *tx, session_id).await?;

        // Read under the row lock, so concurrent writers never share a number
        let sequence = sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(guess_seq), 0) + 1 FROM game_guesses WHERE game_session_id = $1",
        )
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await?;

        let (record, completion) = guess.place(&session, sequence as u32);

        sqlx::query(
            r#"
            INSERT INTO game_guesses (
                game_session_id,
                guess_seq,
                guess,
                bulls,
                cows,
                guessed_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session_id)
        .bind(sequence)
        .bind(record.guess.to_string())
        .bind(i16::from(record.score.bulls))
        .bind(i16::from(record.score.cows))
        .bind(record.guessed_at)
        .execute(&mut *tx)
        .await?;

        let win = match completion {
            Some(completion) => {
                sqlx::query(
                    "UPDATE game_sessions SET completed_at = $2 WHERE game_session_id = $1",
                )
                .bind(session_id)
                .bind(completion.completed_at)
                .execute(&mut *tx)
                .await?;

                let ranking = &completion.ranking;
                let id = sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO rankings (
                        game_session_id,
                        name,
                        start_time,
                        end_time,
                        duration,
                        guess_count
                    ) VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING ranking_id
                    "#,
                )
                .bind(session_id)
                .bind(ranking.owner_name.as_str())
                .bind(ranking.started_at)
                .bind(ranking.ended_at)
                .bind(ranking.duration_secs)
                .bind(ranking.guess_count as i32)
                .fetch_one(&mut *tx)
                .await?;

                Some(RecordedWin {
                    ranking_id: RankingId(id),
                    completion,
                })
            }
            None => None,
        };

        tx.commit().await?;

        if let Some(win) = &win {
            tracing::info!(
                session_id = %guess.session_id,
                ranking_id = %win.ranking_id,
                "Session completed and ranked"
            );
        }

        Ok(RecordedGuess { record, win })
    }

    async fn mark_abandoned(&self, id: GameSessionId, at: DateTime<Utc>) -> GameResult<()> {
        let mut tx = self.pool.begin().await?;
        lock_open_session(&mut *tx, id.into_uuid()).await?;

        sqlx::query("UPDATE game_sessions SET abandoned_at = $2 WHERE game_session_id = $1")
            .bind(id.into_uuid())
            .bind(at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

const RANKING_COLUMNS: &str =
    "ranking_id, game_session_id, name, start_time, end_time, duration, guess_count";

impl RankingRepository for PgGameRepository {
    async fn top(&self, limit: u32) -> GameResult<Vec<RankingEntry>> {
        let rows = sqlx::query_as::<_, RankingRow>(&format!(
            "SELECT {RANKING_COLUMNS} FROM rankings \
             ORDER BY guess_count, duration, ranking_id LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RankingRow::into_entry).collect())
    }

    async fn list_all(&self) -> GameResult<Vec<RankingEntry>> {
        let rows = sqlx::query_as::<_, RankingRow>(&format!(
            "SELECT {RANKING_COLUMNS} FROM rankings ORDER BY end_time DESC, ranking_id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RankingRow::into_entry).collect())
    }

    async fn find(&self, id: RankingId) -> GameResult<Option<RankingEntry>> {
        let row = sqlx::query_as::<_, RankingRow>(&format!(
            "SELECT {RANKING_COLUMNS} FROM rankings WHERE ranking_id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RankingRow::into_entry))
    }

    async fn update(&self, id: RankingId, edit: &RankingEdit) -> GameResult<Option<RankingEntry>> {
        let row = sqlx::query_as::<_, RankingRow>(&format!(
            r#"
            UPDATE rankings
            SET name = $2, start_time = $3, end_time = $4, duration = $5, guess_count = $6
            WHERE ranking_id = $1
            RETURNING {RANKING_COLUMNS}
            "#
        ))
        .bind(id.0)
        .bind(edit.name.as_str())
        .bind(edit.started_at)
        .bind(edit.ended_at)
        .bind(edit.duration_secs)
        .bind(edit.guess_count as i32)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            tracing::info!(ranking_id = %id, "Ranking entry updated");
        }

        Ok(row.map(RankingRow::into_entry))
    }

    async fn delete(&self, id: RankingId) -> GameResult<bool> {
        let deleted = sqlx::query("DELETE FROM rankings WHERE ranking_id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!(ranking_id = %id, "Ranking entry deleted");
        }

        Ok(deleted > 0)
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct GameSessionRow {
    game_session_id: Uuid,
    secret: String,
    owner_name: String,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    abandoned_at: Option<DateTime<Utc>>,
}

impl GameSessionRow {
    fn into_session(self) -> GameResult<GameSession> {
        let corrupt = |what: &str| {
            GameError::Internal(format!(
                "stored {what} of session {} is invalid",
                self.game_session_id
            ))
        };

        Ok(GameSession {
            id: GameSessionId::from_uuid(self.game_session_id),
            secret: Secret::parse(&self.secret).map_err(|_| corrupt("secret"))?,
            owner_name: OwnerName::new(&self.owner_name).map_err(|_| corrupt("owner name"))?,
            started_at: self.started_at,
            completed_at: self.completed_at,
            abandoned_at: self.abandoned_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct GuessRow {
    game_session_id: Uuid,
    guess_seq: i32,
    guess: String,
    bulls: i16,
    cows: i16,
    guessed_at: DateTime<Utc>,
}

impl GuessRow {
    fn into_record(self) -> GameResult<GuessRecord> {
        let guess = Guess::parse(&self.guess).map_err(|_| {
            GameError::Internal(format!(
                "stored guess {} of session {} is invalid",
                self.guess_seq, self.game_session_id
            ))
        })?;

        Ok(GuessRecord {
            session_id: GameSessionId::from_uuid(self.game_session_id),
            sequence: self.guess_seq as u32,
            guess,
            score: Score::new(self.bulls as u8, self.cows as u8),
            guessed_at: self.guessed_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RankingRow {
    ranking_id: i64,
    game_session_id: Option<Uuid>,
    name: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    duration: f64,
    guess_count: i32,
}

impl RankingRow {
    fn into_entry(self) -> RankingEntry {
        RankingEntry {
            id: RankingId(self.ranking_id),
            session_id: self.game_session_id.map(GameSessionId::from_uuid),
            owner_name: self.name,
            started_at: self.start_time,
            ended_at: self.end_time,
            duration_secs: self.duration,
            guess_count: self.guess_count as u32,
        }
    }
}
