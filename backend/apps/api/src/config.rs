//! Startup configuration read from the environment.

use admin::AdminConfig;
use anyhow::{Context, ensure};
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:12527";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Server settings
#[derive(Debug)]
pub struct Settings {
    /// `None` runs on the in-memory store
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub admin: AdminConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:12527")?;

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            admin: admin_config_from_env()?,
        })
    }
}

fn admin_config_from_env() -> anyhow::Result<AdminConfig> {
    let mut config = match env::var("ADMIN_SESSION_SECRET") {
        Ok(secret_b64) => AdminConfig {
            session_secret: decode_secret(&secret_b64)?,
            ..AdminConfig::default()
        },
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("ADMIN_SESSION_SECRET not set, using a random secret");
            AdminConfig::development()
        }
        Err(_) => anyhow::bail!("ADMIN_SESSION_SECRET must be set in production"),
    };

    if let Ok(secure) = env::var("ADMIN_COOKIE_SECURE") {
        config.cookie_secure = parse_flag(&secure)
            .with_context(|| format!("ADMIN_COOKIE_SECURE must be true or false, got {secure:?}"))?;
    }

    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| config.username.clone());
    match env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => {
            config = config.with_credentials(username, &password);
        }
        _ => tracing::warn!("ADMIN_PASSWORD not set, admin sign-in is disabled"),
    }

    Ok(config)
}

/// Standard base64, exactly 32 bytes once decoded
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64_standard(secret_b64.trim())
        .context("ADMIN_SESSION_SECRET is not valid base64")?;
    ensure!(
        bytes.len() == 32,
        "ADMIN_SESSION_SECRET must decode to 32 bytes, got {}",
        bytes.len()
    );

    let mut secret = [0u8; 32];
    secret.copy_from_slice(&bytes);
    Ok(secret)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
