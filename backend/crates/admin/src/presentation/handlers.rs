//! HTTP Handlers

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use game::domain::repository::RankingRepository;
use game::domain::value_objects::RankingId;
use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::application::{
    DeleteRankingUseCase, ListRankingsUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    UpdateRankingInput, UpdateRankingUseCase,
};
use crate::domain::entities::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::error::AdminResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RankingResponse, RankingUpdateRequest,
};

/// Shared state for admin handlers
#[derive(Clone)]
pub struct AdminAppState<S, R>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub rankings: Arc<R>,
    pub config: Arc<AdminConfig>,
}

impl<S, R> AdminAppState<S, R>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: S, rankings: R, config: AdminConfig) -> Self {
        Self {
            sessions: Arc::new(sessions),
            rankings: Arc::new(rankings),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/admin/login
pub async fn login<S, R>(
    State(state): State<AdminAppState<S, R>>,
    Json(req): Json<LoginRequest>,
) -> AdminResult<impl IntoResponse>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.sessions.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let cookie = state.config.cookie().build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            session_token: output.session_token,
            expires_at: output.expires_at,
        }),
    ))
}

/// POST /api/admin/logout
pub async fn logout<S, R>(
    State(state): State<AdminAppState<S, R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::header::extract_session_token(&headers, &state.config.session_cookie_name);

    if let Some(token) = token {
        let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
        // The cookie is cleared regardless
        if let Err(e) = use_case.execute(&token).await {
            tracing::warn!(error = %e, "Admin sign-out failed");
        }
    }

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, state.config.cookie().build_delete_cookie())],
    )
}

// ============================================================================
// Rankings
// ============================================================================

/// GET /api/admin/rankings
pub async fn list_rankings<S, R>(
    State(state): State<AdminAppState<S, R>>,
) -> AdminResult<Json<Vec<RankingResponse>>>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListRankingsUseCase::new(state.rankings.clone());
    let entries = use_case.execute().await?;

    Ok(Json(entries.into_iter().map(RankingResponse::from).collect()))
}

/// PUT /api/admin/rankings/{id}
pub async fn update_ranking<S, R>(
    State(state): State<AdminAppState<S, R>>,
    Extension(session): Extension<AdminSession>,
    Path(id): Path<i64>,
    Json(req): Json<RankingUpdateRequest>,
) -> AdminResult<Json<RankingResponse>>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateRankingUseCase::new(state.rankings.clone());

    let input = UpdateRankingInput {
        id: RankingId(id),
        name: req.name,
        start_time: req.start_time,
        end_time: req.end_time,
        duration: req.duration,
        guess_count: req.guess_count,
    };

    let entry = use_case.execute(input).await?;
    tracing::debug!(admin = %session.username, ranking_id = id, "Ranking update applied");

    Ok(Json(RankingResponse::from(entry)))
}

/// DELETE /api/admin/rankings/{id}
pub async fn delete_ranking<S, R>(
    State(state): State<AdminAppState<S, R>>,
    Extension(session): Extension<AdminSession>,
    Path(id): Path<i64>,
) -> AdminResult<StatusCode>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteRankingUseCase::new(state.rankings.clone());
    use_case.execute(RankingId(id)).await?;
    tracing::debug!(admin = %session.username, ranking_id = id, "Ranking delete applied");

    Ok(StatusCode::NO_CONTENT)
}
