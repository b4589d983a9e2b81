//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the admin guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AdminAppState;
pub use middleware::require_admin_session;
pub use router::{admin_router, admin_router_with_state};
