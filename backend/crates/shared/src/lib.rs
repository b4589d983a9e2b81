//! Shared Kernel
//!
//! Vocabulary every bounded context of the game server agrees on:
//! - the unified [`error::app_error::AppError`] and its HTTP-mapped kind
//! - typed identifiers ([`id::Id`])
//!
//! Nothing game- or admin-specific belongs here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
