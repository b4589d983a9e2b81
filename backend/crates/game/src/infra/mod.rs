//! Infrastructure Layer - Persistence implementations

pub mod memory;
pub mod postgres;
