//! Credential extraction from request headers

use axum::http::{HeaderMap, header};

use crate::cookie::extract_cookie;

/// Token from `Authorization: Bearer <token>`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

/// Session token from the named cookie, falling back to a bearer header.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    extract_cookie(headers, cookie_name).or_else(|| extract_bearer_token(headers))
}
