//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (GameSession, GuessRecord, RankingEntry)
//! - Domain value objects (Secret, Guess, Score, OwnerName, RankingEdit)
//! - Domain services (secret generation, scoring)
//! - Hint inference
//! - Repository traits (interfaces)

pub mod entities;
pub mod hint;
pub mod repository;
pub mod services;
pub mod value_objects;
