//! In-memory admin session store
//!
//! Admin sessions are few and short-lived, so they are not persisted; a
//! restart signs every administrator out.

use crate::domain::entities::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::error::AdminResult;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use kernel::id::AdminSessionId;
use std::sync::Arc;

/// Keyed admin session store; clones share state
#[derive(Debug, Clone, Default)]
pub struct MemoryAdminSessionStore {
    sessions: Arc<DashMap<AdminSessionId, AdminSession>>,
}

impl MemoryAdminSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl AdminSessionRepository for MemoryAdminSessionStore {
    async fn create(&self, session: &AdminSession) -> AdminResult<()> {
        self.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn find(&self, id: AdminSessionId) -> AdminResult<Option<AdminSession>> {
        Ok(self.sessions.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: AdminSessionId) -> AdminResult<bool> {
        Ok(self.sessions.remove(&id).is_some())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AdminResult<usize> {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired_at(now));
        Ok(before.saturating_sub(self.sessions.len()))
    }
}
