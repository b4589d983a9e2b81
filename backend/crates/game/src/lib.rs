//! Bulls and Cows Game Module
//!
//! Clean Architecture structure:
//! - `domain/` - Scoring, secret generation, hint inference, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers
//!
//! ## Consistency Model
//! - Every session owns its secret; there is no process-wide answer
//! - Guess submission and surrender are serialized per session
//! - A winning guess, the completion flag and the ranking entry are written
//!   as one unit

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GameConfig;
pub use error::{GameError, GameResult};
pub use infra::memory::MemoryGameRepository;
pub use infra::postgres::PgGameRepository;
pub use presentation::router::game_router;

#[cfg(test)]
mod tests;
