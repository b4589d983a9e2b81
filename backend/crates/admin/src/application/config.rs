//! Application Configuration
//!
//! Configuration for the admin application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Admin application configuration
#[derive(Clone)]
pub struct AdminConfig {
    /// Administrator login name
    pub username: String,
    /// SHA-256 of the administrator password; `None` disables sign-in
    pub password_digest: Option<[u8; 32]>,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Admin session lifetime
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password_digest: None,
            session_cookie_name: "admin_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(24 * 3600), // 1 day
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

// Keep secrets out of logs
impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("sign_in_enabled", &self.password_digest.is_some())
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_ttl", &self.session_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .finish_non_exhaustive()
    }
}

impl AdminConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_key(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Set the administrator credentials
    pub fn with_credentials(mut self, username: impl Into<String>, password: &str) -> Self {
        self.username = username.into();
        self.password_digest = Some(platform::crypto::sha256(password.as_bytes()));
        self
    }

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::days(1))
    }

    /// Cookie attributes for the admin session cookie
    pub fn cookie(&self) -> platform::cookie::CookieConfig {
        platform::cookie::CookieConfig {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: Some(self.session_ttl.as_secs()),
            ..platform::cookie::CookieConfig::new(self.session_cookie_name.clone())
        }
    }
}
