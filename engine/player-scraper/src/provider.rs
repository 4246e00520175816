use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::cache::SeasonCache;
use crate::config::ScraperConfig;
use crate::sample::generate_sample_data;
use crate::scraper::StatsScraper;
use crate::types::PositionData;

/// Supplies raw per-position records to the ranking engine
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch every position. Implementations may serve sample data.
    async fn fetch_all_positions(&self) -> Result<PositionData>;

    /// Previously fetched bundle, if one exists
    async fn load_cached_positions(&self) -> Result<Option<PositionData>>;
}

/// Scrapes the live sources and keeps the result in a JSON cache file
pub struct LiveStatsProvider {
    scraper: StatsScraper,
    cache: SeasonCache,
}

impl LiveStatsProvider {
    pub fn new(config: ScraperConfig, cache: SeasonCache) -> Result<Self> {
        Ok(Self { scraper: StatsScraper::new(config)?, cache })
    }

    pub fn cache(&self) -> &SeasonCache {
        &self.cache
    }
}

#[async_trait]
impl StatsProvider for LiveStatsProvider {
    async fn fetch_all_positions(&self) -> Result<PositionData> {
        let data = match self.scraper.fetch_all().await {
            Some(data) => data,
            None => {
                warn!("No real data could be fetched, using sample data");
                generate_sample_data()
            }
        };

        info!(
            "Fetched {} QB, {} RB, {} WR, {} TE",
            data.qb.len(),
            data.rb.len(),
            data.wr.len(),
            data.te.len()
        );

        if let Err(e) = self.cache.store(&data).await {
            warn!("Error caching data: {:#}", e);
        }

        Ok(data)
    }

    async fn load_cached_positions(&self) -> Result<Option<PositionData>> {
        self.cache.load().await
    }
}

/// Serves a fixed bundle and never reports a cache
#[derive(Debug, Clone, Default)]
pub struct StaticStatsProvider {
    data: PositionData,
}

impl StaticStatsProvider {
    pub fn new(data: PositionData) -> Self {
        Self { data }
    }

    pub fn sample() -> Self {
        Self::new(generate_sample_data())
    }
}

#[async_trait]
impl StatsProvider for StaticStatsProvider {
    async fn fetch_all_positions(&self) -> Result<PositionData> {
        Ok(self.data.clone())
    }

    async fn load_cached_positions(&self) -> Result<Option<PositionData>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use tempfile::TempDir;

    fn unreachable_config() -> ScraperConfig {
        let mut config = ScraperConfig::default();
        config.stats_base_url = "http://127.0.0.1:9/years/2024".to_string();
        config.fantasy_base_url = "http://127.0.0.1:9/stats".to_string();
        config.timeout_secs = 1;
        config
    }

    #[tokio::test]
    async fn test_failed_scrape_serves_sample_and_writes_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = SeasonCache::new(temp_dir.path().join("cache/season.json"));
        let provider = LiveStatsProvider::new(unreachable_config(), cache).unwrap();

        assert!(provider.load_cached_positions().await.unwrap().is_none());

        let data = provider.fetch_all_positions().await.unwrap();
        assert_eq!(data.players(Position::Qb).len(), 5);
        assert_eq!(data.qb[0].name, "josh allen");

        let cached = provider.load_cached_positions().await.unwrap().unwrap();
        assert_eq!(cached.total_players(), data.total_players());
    }

    #[tokio::test]
    async fn test_static_provider_has_no_cache() {
        let provider = StaticStatsProvider::sample();

        assert!(provider.load_cached_positions().await.unwrap().is_none());
        assert_eq!(provider.fetch_all_positions().await.unwrap().total_players(), 20);
    }
}
