//! Per-session write serialization
//!
//! Guess submission and surrender hold a session's lease for the whole
//! read-score-write sequence. Sessions never share a mutex, so different
//! sessions proceed in parallel. The registry is per process; the store
//! still owns sequence numbering and the single-win rule.

use dashmap::DashMap;
use kernel::id::GameSessionId;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed registry of per-session async mutexes.
///
/// Entries exist only while someone holds or waits for them.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    inner: Arc<DashMap<GameSessionId, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`.
    pub async fn acquire(&self, id: GameSessionId) -> SessionLease {
        // Clone out of the map before awaiting; a shard guard must not be
        // held across the await.
        let mutex = self.inner.entry(id).or_default().value().clone();
        let guard = mutex.lock_owned().await;

        SessionLease {
            id,
            guard: Some(guard),
            registry: Arc::clone(&self.inner),
        }
    }

    /// Number of sessions currently locked or awaited.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Exclusive access to one session; released on drop.
#[derive(Debug)]
pub struct SessionLease {
    id: GameSessionId,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Arc<DashMap<GameSessionId, Arc<Mutex<()>>>>,
}

impl Drop for SessionLease {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Only the map's own reference left: nobody holds or awaits it
        self.registry
            .remove_if(&self.id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
