//! Router assembly

use admin::{AdminConfig, MemoryAdminSessionStore, admin_router};
use axum::{Json, Router, routing::get};
use game::domain::repository::{GameSessionRepository, RankingRepository};
use game::{GameConfig, game_router};
use serde::Serialize;

/// Response for GET /api/version
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// GET /api/version
async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Everything under `/api`, backed by one game store.
///
/// Transport layers (CORS, tracing) are added by the caller.
pub fn build_app<R>(repo: R, game_config: GameConfig, admin_config: AdminConfig) -> Router
where
    R: GameSessionRepository + RankingRepository + Clone + Send + Sync + 'static,
{
    let api = Router::new()
        .route("/version", get(version))
        .merge(game_router(repo.clone(), game_config))
        .nest(
            "/admin",
            admin_router(MemoryAdminSessionStore::new(), repo, admin_config),
        );

    Router::new().nest("/api", api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use game::MemoryGameRepository;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(
            MemoryGameRepository::new(),
            GameConfig::default(),
            AdminConfig::development().with_credentials("admin", "pw"),
        )
    }

    async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_version() {
        let request = Request::get("/api/version").body(Body::empty()).unwrap();
        let (status, body) = call(&app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_routes_are_mounted_under_api() {
        let app = app();

        let request = Request::post("/api/game/new")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Ann"}).to_string()))
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["sessionId"].is_string());

        let request = Request::get("/api/rankings").body(Body::empty()).unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let request = Request::get("/api/admin/rankings").body(Body::empty()).unwrap();
        let (status, _) = call(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_won_game_visible_to_admin() {
        let repo = MemoryGameRepository::new();
        let app = build_app(
            repo.clone(),
            GameConfig::default(),
            AdminConfig::development().with_credentials("admin", "pw"),
        );

        let request = Request::post("/api/game/new")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Ann"}).to_string()))
            .unwrap();
        let (_, body) = call(&app, request).await;
        let session_id = body["sessionId"].as_str().unwrap().to_string();

        // Clones share state: read the secret the server drew
        let session = repo
            .find_by_id(session_id.parse().unwrap())
            .await
            .unwrap()
            .unwrap();
        let answer = session.secret.to_string();

        let request = Request::post("/api/game/guess")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({"sessionId": session_id, "number": answer}).to_string(),
            ))
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["won"], true);
        let ranking_id = body["rankingId"].clone();

        let request = Request::post("/api/admin/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"username": "admin", "password": "pw"}).to_string()))
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        let bearer = format!("Bearer {}", body["sessionToken"].as_str().unwrap());

        let request = Request::get("/api/admin/rankings")
            .header(header::AUTHORIZATION, bearer)
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], ranking_id);
        assert_eq!(body[0]["name"], "Ann");
        assert_eq!(body[0]["guessCount"], 1);
    }
}
