//! Ranking Administration Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin session entity, credential and token checks
//! - `application/` - Sign-in/out, session checks, ranking corrections
//! - `infra/` - In-memory admin session store
//! - `presentation/` - HTTP handlers, guard middleware, router
//!
//! ## Security Model
//! - One administrator, configured through `AdminConfig`
//! - Session tokens are `<session id>.<HMAC-SHA256>` and verified in
//!   constant time before any store lookup
//! - Sessions expire after `AdminConfig::session_ttl` and are not persisted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AdminConfig;
pub use error::{AdminError, AdminResult};
pub use infra::memory::MemoryAdminSessionStore;
pub use presentation::router::admin_router;
