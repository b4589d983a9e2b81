//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no game vocabulary:
//! - Cryptographic utilities (random bytes, SHA-256, HMAC, Base64)
//! - Cookie parsing and `Set-Cookie` building
//! - Credential extraction from request headers

pub mod cookie;
pub mod crypto;
pub mod header;
