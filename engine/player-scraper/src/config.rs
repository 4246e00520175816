use serde::{Deserialize, Serialize};

/// Configuration for the upstream statistics sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Season stat tables (passing.htm, rushing.htm, receiving.htm live under this)
    pub stats_base_url: String,

    /// Fantasy production tables (qb.php, rb.php, ...)
    pub fantasy_base_url: String,

    /// Average draft position tables (qb.php, rb.php, ...)
    pub adp_base_url: String,

    /// Season the stat tables describe
    pub season: u16,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self::for_season(2024)
    }
}

impl ScraperConfig {
    pub fn for_season(season: u16) -> Self {
        Self {
            stats_base_url: format!("https://www.pro-football-reference.com/years/{season}"),
            fantasy_base_url: "https://www.fantasypros.com/nfl/stats".to_string(),
            adp_base_url: "https://www.fantasypros.com/nfl/adp".to_string(),
            season,
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let season = std::env::var("RANKINGS_SEASON")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2024);

        let mut config = Self::for_season(season);

        if let Ok(timeout) = std::env::var("RANKINGS_HTTP_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().unwrap_or(10);
        }

        if let Ok(user_agent) = std::env::var("RANKINGS_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_is_part_of_stats_url() {
        let config = ScraperConfig::for_season(2023);
        assert_eq!(config.stats_base_url, "https://www.pro-football-reference.com/years/2023");
        assert_eq!(ScraperConfig::default().season, 2024);
    }
}
