//! Domain Layer - Admin sessions
//!
//! This layer contains:
//! - Domain entities (AdminSession)
//! - Domain services (credential check, session token signing)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
