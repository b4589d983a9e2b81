//! Repository Traits

use chrono::{DateTime, Utc};
use kernel::id::AdminSessionId;

use crate::domain::entities::AdminSession;
use crate::error::AdminResult;

/// Admin session store
#[trait_variant::make(AdminSessionRepository: Send)]
pub trait LocalAdminSessionRepository {
    async fn create(&self, session: &AdminSession) -> AdminResult<()>;

    /// Session by id, including expired ones
    async fn find(&self, id: AdminSessionId) -> AdminResult<Option<AdminSession>>;

    /// `false` if no such session existed
    async fn delete(&self, id: AdminSessionId) -> AdminResult<bool>;

    /// Drop every session expired at `now`; returns how many were removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> AdminResult<usize>;
}
