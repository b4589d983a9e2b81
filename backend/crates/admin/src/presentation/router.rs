//! Admin Router

use axum::{
    Router,
    middleware,
    routing::{get, post, put},
};
use game::domain::repository::RankingRepository;

use crate::application::config::AdminConfig;
use crate::domain::repository::AdminSessionRepository;
use crate::presentation::handlers::{self, AdminAppState};
use crate::presentation::middleware::require_admin_session;

/// Routes for `/api/admin`
pub fn admin_router<S, R>(sessions: S, rankings: R, config: AdminConfig) -> Router
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    admin_router_with_state(AdminAppState::new(sessions, rankings, config))
}

/// Same as [`admin_router`], over caller-built state
pub fn admin_router_with_state<S, R>(state: AdminAppState<S, R>) -> Router
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let protected = Router::new()
        .route("/rankings", get(handlers::list_rankings::<S, R>))
        .route(
            "/rankings/{id}",
            put(handlers::update_ranking::<S, R>).delete(handlers::delete_ranking::<S, R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_session::<S, R>,
        ));

    Router::new()
        .route("/login", post(handlers::login::<S, R>))
        .route("/logout", post(handlers::logout::<S, R>))
        .merge(protected)
        .with_state(state)
}
