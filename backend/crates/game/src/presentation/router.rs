//! Game Router

use crate::application::config::GameConfig;
use crate::domain::repository::{GameSessionRepository, RankingRepository};
use crate::presentation::handlers::{self, GameAppState};
use axum::{
    Router,
    routing::{get, post},
};

/// Routes for `/api/game` and `/api/rankings`, sharing one repository
pub fn game_router<R>(repo: R, config: GameConfig) -> Router
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    game_router_with_state(GameAppState::new(repo, config))
}

/// Same as [`game_router`], over caller-built state
pub fn game_router_with_state<R>(state: GameAppState<R>) -> Router
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let game = Router::new()
        .route("/new", post(handlers::new_game::<R>))
        .route("/guess", post(handlers::submit_guess::<R>))
        .route("/surrender", post(handlers::surrender::<R>))
        .route("/{id}", get(handlers::view_session::<R>))
        .route("/{id}/hint", get(handlers::hint::<R>));

    Router::new()
        .nest("/game", game)
        .route("/rankings", get(handlers::top_rankings::<R>))
        .with_state(state)
}
