//! Admin Middleware
//!
//! Guards the ranking administration routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use game::domain::repository::RankingRepository;

use crate::application::CheckSessionUseCase;
use crate::domain::repository::AdminSessionRepository;
use crate::error::AdminError;
use crate::presentation::handlers::AdminAppState;

/// Require a live admin session from the `admin_session` cookie or a bearer
/// token. The resolved [`AdminSession`](crate::domain::entities::AdminSession)
/// is stored in request extensions.
pub async fn require_admin_session<S, R>(
    State(state): State<AdminAppState<S, R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: AdminSessionRepository + Clone + Send + Sync + 'static,
    R: RankingRepository + Clone + Send + Sync + 'static,
{
    let token = platform::header::extract_session_token(
        req.headers(),
        &state.config.session_cookie_name,
    );

    let Some(token) = token else {
        return Err(unauthorized(AdminError::SessionInvalid));
    };

    let use_case = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone());
    let session = use_case.execute(&token).await.map_err(unauthorized)?;

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

fn unauthorized(err: AdminError) -> Response {
    let mut response = err.into_response();
    response
        .headers_mut()
        .insert("X-Auth-Required", HeaderValue::from_static("true"));
    response
}
