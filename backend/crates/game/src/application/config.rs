//! Application Configuration
//!
//! Configuration for the game application layer.

/// Game application configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Ranking list length when the caller gives none
    pub default_ranking_limit: u32,
    /// Upper bound for a requested ranking list length
    pub max_ranking_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_ranking_limit: 10,
            max_ranking_limit: 100,
        }
    }
}

impl GameConfig {
    /// Effective ranking limit for a requested one, clamped to `1..=max`.
    pub fn ranking_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_ranking_limit)
            .clamp(1, self.max_ranking_limit.max(1))
    }
}
