use anyhow::{Context, Result};
use player_scraper::{LiveStatsProvider, Position, PositionData, SeasonCache, StatsProvider};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::RankingConfig;
use crate::fallback::fallback_players;
use crate::models::{FallbackReason, RankedPlayer, RankingOutcome};
use crate::ranker::rank_players;
use crate::weights::WeightTables;

/// Ranks players per position from whatever the provider supplies.
///
/// Never fails: provider errors, provider panics and empty positions degrade
/// to the built-in two-player list for the position.
#[derive(Clone)]
pub struct RankingEngine {
    provider: Arc<dyn StatsProvider>,
    tables: Arc<WeightTables>,
}

impl RankingEngine {
    pub fn new(provider: Arc<dyn StatsProvider>, tables: WeightTables) -> Self {
        Self { provider, tables: Arc::new(tables) }
    }

    /// Engine backed by the live scraper and the configured cache file
    pub fn from_config(config: &RankingConfig) -> Result<Self> {
        info!("Creating ranking engine (cache: {})", config.cache_file.display());

        let cache = SeasonCache::new(config.cache_file.clone());
        let provider = LiveStatsProvider::new(config.scraper.clone(), cache)?;

        Ok(Self::new(Arc::new(provider), WeightTables::standard()))
    }

    pub fn tables(&self) -> &WeightTables {
        &self.tables
    }

    /// Cached bundle if present, otherwise a fresh fetch.
    ///
    /// Provider calls run on their own task so a panicking provider surfaces
    /// as an error instead of unwinding into the caller.
    async fn load_positions(&self) -> Result<PositionData> {
        let provider = self.provider.clone();
        tokio::spawn(async move { cached_or_fetched(provider.as_ref()).await })
            .await
            .context("Stats provider task failed")?
    }

    /// Rank one position, reporting whether the result is real or a fallback
    pub async fn rank_position(&self, position: Position) -> RankingOutcome {
        info!("Ranking {}s with season data...", position);

        let data = match self.load_positions().await {
            Ok(data) => data,
            Err(e) => {
                error!("Error ranking {}s: {:#}", position, e);
                return RankingOutcome::Fallback {
                    reason: FallbackReason::ProviderFailed(format!("{e:#}")),
                    players: fallback_players(position),
                };
            }
        };

        let records = data.players(position);
        if records.is_empty() {
            info!("No {} data available, using sample data", position);
            return RankingOutcome::Fallback {
                reason: FallbackReason::EmptyPosition,
                players: fallback_players(position),
            };
        }

        let ranked = rank_players(records, self.tables.for_position(position));
        info!("Ranked {} {}s", ranked.len(), position);
        RankingOutcome::Ranked(ranked)
    }

    pub async fn rank(&self, position: Position) -> Vec<RankedPlayer> {
        self.rank_position(position).await.into_players()
    }

    pub async fn rank_qbs(&self) -> Vec<RankedPlayer> {
        self.rank(Position::Qb).await
    }

    pub async fn rank_rbs(&self) -> Vec<RankedPlayer> {
        self.rank(Position::Rb).await
    }

    pub async fn rank_wrs(&self) -> Vec<RankedPlayer> {
        self.rank(Position::Wr).await
    }

    pub async fn rank_tes(&self) -> Vec<RankedPlayer> {
        self.rank(Position::Te).await
    }

    /// The position's ranking cut to at most `limit` players
    pub async fn top_players(&self, position: Position, limit: usize) -> Vec<RankedPlayer> {
        let mut players = self.rank(position).await;
        players.truncate(limit);
        players
    }
}

async fn cached_or_fetched(provider: &dyn StatsProvider) -> Result<PositionData> {
    let cached = match provider.load_cached_positions().await {
        Ok(cached) => cached,
        Err(e) => {
            warn!("Ignoring unreadable cache: {:#}", e);
            None
        }
    };

    match cached {
        Some(data) => Ok(data),
        None => provider.fetch_all_positions().await,
    }
}
