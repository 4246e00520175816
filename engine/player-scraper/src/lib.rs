//! Player data sources for fantasy rankings
//!
//! Scrapes season passing, rushing and receiving tables plus per-position
//! fantasy production, merges them into one record per player, and caches the
//! bundle as JSON. Also scrapes average draft position tables.

pub mod adp;
pub mod cache;
pub mod config;
pub mod merge;
pub mod normalize;
pub mod provider;
pub mod sample;
pub mod scraper;
pub mod types;

pub use adp::{AdpEntry, AdpProvider, AdpScraper, SampleAdp};
pub use cache::SeasonCache;
pub use config::ScraperConfig;
pub use provider::{LiveStatsProvider, StaticStatsProvider, StatsProvider};
pub use sample::generate_sample_data;
pub use scraper::StatsScraper;
pub use types::{Metric, PlayerRecord, PlayerStats, Position, PositionData, UnknownPosition};
