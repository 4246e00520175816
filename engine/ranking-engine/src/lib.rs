//! Fantasy Rankings Engine
//!
//! Scores every player of a position with a weighted composite of selected
//! season metrics, then sorts, truncates and ranks them. Provider failures
//! never reach the caller: the engine degrades to a fixed fallback list.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod export;
pub mod fallback;
pub mod models;
pub mod ranker;
pub mod weights;

pub use calculator::composite_score;
pub use config::RankingConfig;
pub use engine::RankingEngine;
pub use models::*;
pub use ranker::{rank_players, MAX_RANKED_PLAYERS};
pub use weights::{WeightTable, WeightTables};
