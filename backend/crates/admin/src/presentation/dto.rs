//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use game::presentation::dto::RankingResponse;

/// Request for POST /api/admin/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for POST /api/admin/login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    /// Same value as the cookie, for clients that send a bearer header
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Request for PUT /api/admin/rankings/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingUpdateRequest {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Seconds
    pub duration: f64,
    pub guess_count: u32,
}
