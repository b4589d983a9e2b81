//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors render through
//! the game and admin crates' own error types.

mod app;
mod config;

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use game::{GameConfig, MemoryGameRepository, PgGameRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::build_app;
use crate::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,game=info,admin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    tracing::debug!(?settings, "Loaded settings");

    let app = match settings.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .context("failed to connect to DATABASE_URL")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await
                .context("failed to run migrations")?;

            tracing::info!("Migrations completed");

            build_app(
                PgGameRepository::new(pool),
                GameConfig::default(),
                settings.admin,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, games and rankings are kept in memory only");
            build_app(
                MemoryGameRepository::new(),
                GameConfig::default(),
                settings.admin,
            )
        }
    };

    let app: Router = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.frontend_origins));

    // Start server
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!("Listening on {}", settings.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<http::HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
