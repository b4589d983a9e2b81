//! Check Session Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AdminConfig;
use crate::domain::entities::AdminSession;
use crate::domain::repository::AdminSessionRepository;
use crate::domain::services::verify_session_token;
use crate::error::{AdminError, AdminResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AdminConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AdminSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AdminConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token to a live admin session. Expired sessions are removed.
    pub async fn execute(&self, session_token: &str) -> AdminResult<AdminSession> {
        let session_id = verify_session_token(session_token, &self.config.session_secret)
            .ok_or(AdminError::SessionInvalid)?;

        let session = self
            .session_repo
            .find(session_id)
            .await?
            .ok_or(AdminError::SessionInvalid)?;

        if session.is_expired_at(Utc::now()) {
            self.session_repo.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired admin session rejected");
            return Err(AdminError::SessionInvalid);
        }

        Ok(session)
    }
}
