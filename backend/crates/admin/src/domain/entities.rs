//! Admin Session Entity

use chrono::{DateTime, Duration, Utc};
use kernel::id::AdminSessionId;

/// A signed-in administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub id: AdminSessionId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(username: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: AdminSessionId::new(),
            username: username.into(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
