//! Sign Out Use Case

use std::sync::Arc;

use crate::application::config::AdminConfig;
use crate::domain::repository::AdminSessionRepository;
use crate::domain::services::verify_session_token;
use crate::error::AdminResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// End the session behind `session_token`. Unknown or forged tokens are
    /// ignored; returns whether a session was removed.
    pub async fn execute(&self, session_token: &str) -> AdminResult<bool> {
        let Some(session_id) = verify_session_token(session_token, &self.config.session_secret)
        else {
            return Ok(false);
        };

        let removed = self.session_repo.delete(session_id).await?;
        if removed {
            tracing::info!(session_id = %session_id, "Administrator signed out");
        }
        Ok(removed)
    }
}
