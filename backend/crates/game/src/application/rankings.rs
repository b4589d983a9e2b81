//! Top Rankings Use Case

use crate::application::config::GameConfig;
use crate::domain::entities::RankingEntry;
use crate::domain::repository::RankingRepository;
use crate::error::GameResult;
use std::sync::Arc;

/// Top Rankings Use Case
pub struct TopRankingsUseCase<R>
where
    R: RankingRepository,
{
    repo: Arc<R>,
    config: Arc<GameConfig>,
}

impl<R> TopRankingsUseCase<R>
where
    R: RankingRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<GameConfig>) -> Self {
        Self { repo, config }
    }

    /// Best entries, fewest guesses first. `limit` is clamped to the configured range.
    pub async fn execute(&self, limit: Option<u32>) -> GameResult<Vec<RankingEntry>> {
        let limit = self.config.ranking_limit(limit);
        self.repo.top(limit).await
    }
}
