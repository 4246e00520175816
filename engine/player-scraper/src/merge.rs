use std::collections::HashMap;

use crate::normalize::normalize_player_name;
use crate::types::{Metric, PlayerRecord};

/// Attach fantasy production to stat-table rows.
///
/// Stat rows drive the output: each keeps its order and gains `fantasyPoints`
/// and `fantasyPPG` when a fantasy row with the same normalized name exists.
/// Fantasy-only players are not added.
pub fn merge_fantasy(stat_rows: Vec<PlayerRecord>, fantasy_rows: &[PlayerRecord]) -> Vec<PlayerRecord> {
    let by_name: HashMap<String, &PlayerRecord> = fantasy_rows
        .iter()
        .map(|row| (normalize_player_name(&row.name), row))
        .collect();

    stat_rows
        .into_iter()
        .map(|mut row| {
            if let Some(fantasy) = by_name.get(&normalize_player_name(&row.name)) {
                for metric in [Metric::FantasyPoints, Metric::FantasyPpg] {
                    match fantasy.metric(metric) {
                        Some(value) => row.stats.set(metric, value),
                        None => row.stats.clear(metric),
                    }
                }
            }
            row
        })
        .collect()
}
