//! Domain Services
//!
//! Credential verification and session token signing.
//!
//! Token format: `<session uuid>.<base64url(HMAC-SHA256(secret, uuid))>`

use kernel::id::AdminSessionId;
use platform::crypto::{constant_time_eq, from_base64, hmac_sha256, sha256, to_base64};

/// Check a login attempt against the configured administrator.
///
/// Both comparisons always run, so timing does not reveal which one failed.
pub fn verify_credentials(
    expected_username: &str,
    expected_digest: &[u8; 32],
    username: &str,
    password: &str,
) -> bool {
    let user_ok = constant_time_eq(
        &sha256(expected_username.as_bytes()),
        &sha256(username.as_bytes()),
    );
    let password_ok = constant_time_eq(expected_digest, &sha256(password.as_bytes()));
    user_ok & password_ok
}

/// Create a signed session token
pub fn sign_session_token(id: AdminSessionId, secret: &[u8; 32]) -> String {
    let id = id.to_string();
    let signature = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64(&signature))
}

/// Verify a session token's signature and return its session id
pub fn verify_session_token(token: &str, secret: &[u8; 32]) -> Option<AdminSessionId> {
    let (id, signature_b64) = token.trim().split_once('.')?;
    let signature = from_base64(signature_b64).ok()?;

    let expected = hmac_sha256(secret, id.as_bytes());
    if !constant_time_eq(&expected, &signature) {
        return None;
    }

    id.parse().ok()
}
