use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::types::PositionData;

pub const DEFAULT_CACHE_FILE: &str = "data/cache/2024_season_data.json";

/// JSON file holding the last fetched season bundle
#[derive(Debug, Clone)]
pub struct SeasonCache {
    path: PathBuf,
}

impl Default for SeasonCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE)
    }
}

impl SeasonCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached bundle. A missing file is a cache miss, not an error.
    pub async fn load(&self) -> Result<Option<PositionData>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read cache {}", self.path.display()))
            }
        };

        let data: PositionData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cache {}", self.path.display()))?;

        info!("Loaded cached data from {}", self.path.display());
        Ok(Some(data))
    }

    /// Write the bundle as pretty JSON, creating parent directories
    pub async fn store(&self, data: &PositionData) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(data).context("Failed to serialize season data")?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write cache {}", self.path.display()))?;

        info!("Data cached to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::generate_sample_data;
    use crate::types::{Metric, Position};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let cache = SeasonCache::new(temp_dir.path().join("nope.json"));

        assert!(cache.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_creates_directories_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let cache = SeasonCache::new(temp_dir.path().join("data/cache/season.json"));
        let data = generate_sample_data();

        cache.store(&data).await.unwrap();
        let loaded = cache.load().await.unwrap().unwrap();

        assert_eq!(loaded.qb.len(), 5);
        assert_eq!(loaded.te[4].name, "evan engram");
        assert_eq!(loaded.qb[0].metric(Metric::FantasyPpg), Some(24.8));
        assert_eq!(loaded.last_updated, data.last_updated);
    }

    #[tokio::test]
    async fn test_legacy_cache_with_string_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("legacy.json");
        std::fs::write(
            &path,
            r#"{"QB":[{"name":"josh allen","team":"BUF","position":"QB","completionPercentage":"63.3","fantasyPPG":24.8}]}"#,
        )
        .unwrap();

        let loaded = SeasonCache::new(&path).load().await.unwrap().unwrap();

        assert_eq!(loaded.qb[0].metric(Metric::CompletionPercentage), Some(63.3));
        assert!(loaded.rb.is_empty());
    }

    #[tokio::test]
    async fn test_cache_with_raw_source_positions_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("2024_season_data.json");
        std::fs::write(
            &path,
            r#"{
                "QB": [{"name": "josh allen", "team": "BUF", "position": "QB", "passAttempts": 565, "fantasyPPG": 24.8}],
                "RB": [
                    {"name": "kyle juszczyk", "team": "SFO", "position": "FB", "rushAttempts": 21, "yardsPerRush": "4.0"},
                    {"name": "christian mccaffrey", "team": "SFO", "position": "RB", "rushAttempts": 272}
                ],
                "WR": [{"name": "tyreek hill", "position": "", "targets": 171, "catchRate": "69.6"}],
                "TE": [],
                "lastUpdated": "2024-09-01T12:00:00.000Z"
            }"#,
        )
        .unwrap();

        let loaded = SeasonCache::new(&path).load().await.unwrap().unwrap();

        assert_eq!(loaded.qb[0].metric(Metric::FantasyPpg), Some(24.8));
        assert_eq!(loaded.rb.len(), 2);
        assert_eq!(loaded.rb[0].position, Position::Rb);
        assert_eq!(loaded.rb[0].metric(Metric::YardsPerRush), Some(4.0));
        assert_eq!(loaded.wr[0].position, Position::Wr);
        assert_eq!(loaded.wr[0].team, "");
        assert_eq!(loaded.wr[0].metric(Metric::CatchRate), Some(69.6));
        assert!(loaded.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(SeasonCache::new(&path).load().await.is_err());
    }
}
