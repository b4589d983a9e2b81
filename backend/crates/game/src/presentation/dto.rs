//! API DTOs (Data Transfer Objects)

use crate::application::{SessionSnapshot, SubmitGuessOutput};
use crate::domain::entities::{GuessRecord, RankingEntry};
use crate::domain::hint::HintSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for POST /api/game/new
#[derive(Debug, Clone, Deserialize)]
pub struct NewGameRequest {
    pub name: String,
}

/// Response for POST /api/game/new
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub session_id: String,
}

/// Request for POST /api/game/guess
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub session_id: String,
    pub number: String,
}

/// Response for POST /api/game/guess
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub bulls: u8,
    pub cows: u8,
    pub won: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess_count: Option<u32>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking_id: Option<i64>,
}

impl From<SubmitGuessOutput> for GuessResponse {
    fn from(output: SubmitGuessOutput) -> Self {
        Self {
            bulls: output.bulls,
            cows: output.cows,
            won: output.won,
            guess_count: output.result.as_ref().map(|r| r.guess_count),
            duration: output.result.as_ref().map(|r| r.duration_secs),
            ranking_id: output.result.as_ref().map(|r| r.ranking_id.0),
        }
    }
}

/// Response for GET /api/game/{id}/hint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub has_data: bool,
    pub confirmed: Vec<u8>,
    pub eliminated: Vec<u8>,
    pub untried: Vec<u8>,
    pub all_confirmed: bool,
    pub digits_needed: usize,
    pub guesses_analyzed: usize,
}

impl From<HintSummary> for HintResponse {
    fn from(summary: HintSummary) -> Self {
        Self {
            has_data: summary.has_data(),
            confirmed: summary.confirmed.to_vec(),
            eliminated: summary.eliminated.to_vec(),
            untried: summary.untried.to_vec(),
            all_confirmed: summary.all_confirmed(),
            digits_needed: summary.digits_needed(),
            guesses_analyzed: summary.guesses_analyzed,
        }
    }
}

/// Request for POST /api/game/surrender
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurrenderRequest {
    pub session_id: String,
}

/// Response for POST /api/game/surrender
#[derive(Debug, Clone, Serialize)]
pub struct SurrenderResponse {
    pub answer: String,
}

/// One row of a session's guess history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessView {
    pub sequence: u32,
    pub number: String,
    pub bulls: u8,
    pub cows: u8,
    pub guessed_at: DateTime<Utc>,
}

impl From<GuessRecord> for GuessView {
    fn from(record: GuessRecord) -> Self {
        Self {
            sequence: record.sequence,
            number: record.guess.to_string(),
            bulls: record.score.bulls,
            cows: record.score.cows,
            guessed_at: record.guessed_at,
        }
    }
}

/// Response for GET /api/game/{id}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
    pub name: String,
    pub state: &'static str,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub guesses: Vec<GuessView>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.session_id.to_string(),
            name: snapshot.owner_name,
            state: snapshot.state.as_str(),
            started_at: snapshot.started_at,
            finished_at: snapshot.finished_at,
            answer: snapshot.answer.map(|secret| secret.to_string()),
            guesses: snapshot.guesses.into_iter().map(GuessView::from).collect(),
        }
    }
}

/// Query for GET /api/rankings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    pub limit: Option<u32>,
}

/// One ranking row, shared with the admin API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Seconds
    pub duration: f64,
    pub guess_count: u32,
}

impl From<RankingEntry> for RankingResponse {
    fn from(entry: RankingEntry) -> Self {
        Self {
            id: entry.id.0,
            name: entry.owner_name,
            start_time: entry.started_at,
            end_time: entry.ended_at,
            duration: entry.duration_secs,
            guess_count: entry.guess_count,
        }
    }
}
