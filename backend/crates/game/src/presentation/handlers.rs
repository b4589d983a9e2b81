//! HTTP Handlers

use crate::application::{
    GameConfig, NewGameUseCase, RequestHintUseCase, SessionLocks, SubmitGuessInput,
    SubmitGuessUseCase, SurrenderUseCase, TopRankingsUseCase, ViewSessionUseCase,
};
use crate::domain::repository::{GameSessionRepository, RankingRepository};
use crate::error::{GameError, GameResult};
use crate::presentation::dto::{
    GuessRequest, GuessResponse, HintResponse, NewGameRequest, NewGameResponse, RankingQuery,
    RankingResponse, SessionResponse, SurrenderRequest, SurrenderResponse,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
    pub locks: SessionLocks,
}

impl<R> GameAppState<R>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: GameConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            locks: SessionLocks::new(),
        }
    }
}

/// A string that is not a UUID cannot name any session.
fn parse_session_id(raw: &str) -> GameResult<GameSessionId> {
    raw.trim().parse().map_err(|_| GameError::SessionNotFound)
}

/// POST /api/game/new
pub async fn new_game<R>(
    State(state): State<GameAppState<R>>,
    Json(req): Json<NewGameRequest>,
) -> GameResult<(StatusCode, Json<NewGameResponse>)>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = NewGameUseCase::new(state.repo.clone());
    let output = use_case.execute(&req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(NewGameResponse {
            session_id: output.session_id.to_string(),
        }),
    ))
}

/// POST /api/game/guess
pub async fn submit_guess<R>(
    State(state): State<GameAppState<R>>,
    Json(req): Json<GuessRequest>,
) -> GameResult<Json<GuessResponse>>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitGuessUseCase::new(state.repo.clone(), state.locks.clone());

    let input = SubmitGuessInput {
        session_id: parse_session_id(&req.session_id)?,
        number: req.number,
    };

    let output = use_case.execute(input).await?;
    Ok(Json(output.into()))
}

/// GET /api/game/{id}/hint
pub async fn hint<R>(
    State(state): State<GameAppState<R>>,
    Path(session_id): Path<String>,
) -> GameResult<Json<HintResponse>>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = RequestHintUseCase::new(state.repo.clone());
    let summary = use_case.execute(parse_session_id(&session_id)?).await?;
    Ok(Json(summary.into()))
}

/// POST /api/game/surrender
pub async fn surrender<R>(
    State(state): State<GameAppState<R>>,
    Json(req): Json<SurrenderRequest>,
) -> GameResult<Json<SurrenderResponse>>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = SurrenderUseCase::new(state.repo.clone(), state.locks.clone());
    let output = use_case.execute(parse_session_id(&req.session_id)?).await?;

    Ok(Json(SurrenderResponse {
        answer: output.answer.to_string(),
    }))
}

/// GET /api/game/{id}
pub async fn view_session<R>(
    State(state): State<GameAppState<R>>,
    Path(session_id): Path<String>,
) -> GameResult<Json<SessionResponse>>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = ViewSessionUseCase::new(state.repo.clone());
    let snapshot = use_case.execute(parse_session_id(&session_id)?).await?;
    Ok(Json(snapshot.into()))
}

/// GET /api/rankings
pub async fn top_rankings<R>(
    State(state): State<GameAppState<R>>,
    Query(query): Query<RankingQuery>,
) -> GameResult<Json<Vec<RankingResponse>>>
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = TopRankingsUseCase::new(state.repo.clone(), state.config.clone());
    let entries = use_case.execute(query.limit).await?;
    Ok(Json(entries.into_iter().map(RankingResponse::from).collect()))
}
