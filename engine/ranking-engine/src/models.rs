use player_scraper::{Metric, PlayerRecord, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player record with its composite score and freshly assigned rank.
///
/// `id` always equals `rank`; neither is a durable player identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPlayer {
    pub id: u32,
    pub rank: u32,
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub composite_score: f64,
}

impl RankedPlayer {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn team(&self) -> &str {
        &self.record.team
    }

    pub fn position(&self) -> Position {
        self.record.position
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.record.metric(metric)
    }
}

/// Why the engine served its built-in list instead of a real ranking
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// The provider's bundle had no records for the position
    EmptyPosition,
    /// The provider returned an error
    ProviderFailed(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::EmptyPosition => f.write_str("no records for position"),
            FallbackReason::ProviderFailed(e) => write!(f, "provider failed: {e}"),
        }
    }
}

/// Result of one ranking request
#[derive(Debug, Clone, PartialEq)]
pub enum RankingOutcome {
    Ranked(Vec<RankedPlayer>),
    Fallback {
        reason: FallbackReason,
        players: Vec<RankedPlayer>,
    },
}

impl RankingOutcome {
    pub fn players(&self) -> &[RankedPlayer] {
        match self {
            RankingOutcome::Ranked(players) => players,
            RankingOutcome::Fallback { players, .. } => players,
        }
    }

    pub fn into_players(self) -> Vec<RankedPlayer> {
        match self {
            RankingOutcome::Ranked(players) => players,
            RankingOutcome::Fallback { players, .. } => players,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RankingOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            RankingOutcome::Ranked(_) => None,
            RankingOutcome::Fallback { reason, .. } => Some(reason),
        }
    }
}
