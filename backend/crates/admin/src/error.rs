//! Admin Error Types
//!
//! Admin-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use game::domain::value_objects::RankingEditError;
use game::error::GameError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Admin-specific result type alias
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-specific error variants
#[derive(Debug, Error)]
pub enum AdminError {
    /// Wrong username or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, forged or expired admin session
    #[error("Admin session not found or expired")]
    SessionInvalid,

    /// Rejected ranking edit
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Ranking entry not found")]
    RankingNotFound,

    /// Failure from the game store
    #[error(transparent)]
    Game(#[from] GameError),
}

impl AdminError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdminError::InvalidCredentials | AdminError::SessionInvalid => ErrorKind::Unauthorized,
            AdminError::Validation(_) => ErrorKind::BadRequest,
            AdminError::RankingNotFound => ErrorKind::NotFound,
            AdminError::Game(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AdminError::Game(e) => e.into_app_error(),
            AdminError::SessionInvalid => {
                AppError::new(self.kind(), self.to_string()).with_action("Sign in again")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AdminError::Game(e) => e.log(),
            AdminError::InvalidCredentials => {
                tracing::warn!("Invalid admin login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Admin error");
            }
        }
    }
}

impl From<RankingEditError> for AdminError {
    fn from(err: RankingEditError) -> Self {
        AdminError::Validation(err.to_string())
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        err.into_app_error()
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
