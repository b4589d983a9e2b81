//! Sign In Use Case
//!
//! Verifies administrator credentials and opens an admin session.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AdminConfig;
use crate::domain::entities::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::domain::services::{sign_session_token, verify_credentials};
use crate::error::{AdminError, AdminResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed token for the cookie / bearer header
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign in use case
pub struct SignInUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<S> SignInUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AdminResult<SignInOutput> {
        let now = Utc::now();

        let purged = self.session_repo.purge_expired(now).await?;
        if purged > 0 {
            tracing::debug!(purged, "Expired admin sessions removed");
        }

        let Some(digest) = self.config.password_digest.as_ref() else {
            tracing::warn!("Admin sign-in attempted but no administrator is configured");
            return Err(AdminError::InvalidCredentials);
        };

        if !verify_credentials(&self.config.username, digest, &input.username, &input.password) {
            return Err(AdminError::InvalidCredentials);
        }

        let session = AdminSession::new(&self.config.username, now, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        tracing::info!(
            session_id = %session.id,
            expires_at = %session.expires_at,
            "Administrator signed in"
        );

        Ok(SignInOutput {
            session_token: sign_session_token(session.id, &self.config.session_secret),
            expires_at: session.expires_at,
        })
    }
}
