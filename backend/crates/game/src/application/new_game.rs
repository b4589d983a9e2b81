//! New Game Use Case

use crate::domain::entities::GameSession;
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::generate_secret;
use crate::domain::value_objects::OwnerName;
use crate::error::GameResult;
use chrono::Utc;
use kernel::id::GameSessionId;
use std::sync::Arc;

/// Output DTO for new game
#[derive(Debug, Clone)]
pub struct NewGameOutput {
    pub session_id: GameSessionId,
}

/// New Game Use Case
pub struct NewGameUseCase<R>
where
    R: GameSessionRepository,
{
    repo: Arc<R>,
}

impl<R> NewGameUseCase<R>
where
    R: GameSessionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_name: &str) -> GameResult<NewGameOutput> {
        let owner_name = OwnerName::new(owner_name)?;
        let secret = generate_secret(&mut rand::rng());

        let session = GameSession::new(secret, owner_name, Utc::now());
        self.repo.create(&session).await?;

        tracing::info!(
            session_id = %session.id,
            owner = %session.owner_name,
            "Game session created"
        );

        Ok(NewGameOutput {
            session_id: session.id,
        })
    }
}
