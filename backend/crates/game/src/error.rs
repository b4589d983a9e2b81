//! Game Error Types
//!
//! Game-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::{CodeError, NameError};

/// Game-specific result type alias
pub type GameResult<T> = Result<T, GameError>;

/// Game-specific error variants
#[derive(Debug, Error)]
pub enum GameError {
    /// No session with the given id
    #[error("Game session not found")]
    SessionNotFound,

    /// Guess, hint or surrender on a won session
    #[error("Game session is already completed")]
    SessionAlreadyCompleted,

    /// Guess, hint or surrender on a surrendered session
    #[error("Game session was abandoned")]
    SessionAbandoned,

    /// Malformed guess, name or session id
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Store failure
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    pub fn invalid_input(reason: impl std::fmt::Display) -> Self {
        GameError::InvalidInput(reason.to_string())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SessionNotFound => ErrorKind::NotFound,
            GameError::SessionAlreadyCompleted => ErrorKind::Conflict,
            GameError::SessionAbandoned => ErrorKind::Gone,
            GameError::InvalidInput(_) => ErrorKind::BadRequest,
            GameError::Persistence(_) | GameError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, with a hint for the player where one helps
    pub fn into_app_error(self) -> AppError {
        match self {
            // Pool exhaustion and connection loss surface as 503
            GameError::Persistence(e) => AppError::from(e),
            GameError::SessionNotFound
            | GameError::SessionAlreadyCompleted
            | GameError::SessionAbandoned => {
                AppError::new(self.kind(), self.to_string()).with_action("Start a new game")
            }
            // Internal details stay in the logs
            GameError::Internal(_) => AppError::internal("Internal server error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            GameError::Persistence(e) => {
                tracing::error!(error = %e, "Game persistence error");
            }
            GameError::Internal(msg) => {
                tracing::error!(message = %msg, "Game internal error");
            }
            GameError::SessionAlreadyCompleted | GameError::SessionAbandoned => {
                tracing::warn!(error = %self, "Operation on finished game session");
            }
            _ => {
                tracing::debug!(error = %self, "Game error");
            }
        }
    }
}

impl From<CodeError> for GameError {
    fn from(err: CodeError) -> Self {
        GameError::invalid_input(err)
    }
}

impl From<NameError> for GameError {
    fn from(err: NameError) -> Self {
        GameError::invalid_input(err)
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        err.into_app_error()
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
