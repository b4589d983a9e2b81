//! Cookie Management Infrastructure

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of one named cookie.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<u64>,
}

impl CookieConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }

    /// `Set-Cookie` value carrying `value`. Always `HttpOnly`.
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![
            format!("{}={}", self.name, value),
            "HttpOnly".to_string(),
            format!("Path={}", self.path),
            format!("SameSite={}", self.same_site.as_str()),
        ];

        if self.secure {
            parts.push("Secure".to_string());
        }
        if let Some(max_age) = self.max_age_secs {
            parts.push(format!("Max-Age={}", max_age));
        }

        parts.join("; ")
    }

    /// `Set-Cookie` value that expires the cookie immediately.
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }
}

/// Extract a cookie value from headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name && !value.is_empty()).then(|| value.to_string())
        })
}
