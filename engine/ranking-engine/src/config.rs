use player_scraper::cache::DEFAULT_CACHE_FILE;
use player_scraper::ScraperConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the ranking engine and its data provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Season bundle cache file
    pub cache_file: PathBuf,

    /// Upstream source configuration
    pub scraper: ScraperConfig,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            scraper: ScraperConfig::default(),
        }
    }
}

impl RankingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self { scraper: ScraperConfig::from_env(), ..Self::default() };

        if let Ok(cache_file) = std::env::var("RANKINGS_CACHE_FILE") {
            config.cache_file = PathBuf::from(cache_file);
        }

        Ok(config)
    }
}
