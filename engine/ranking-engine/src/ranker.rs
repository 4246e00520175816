use player_scraper::PlayerRecord;

use crate::calculator::composite_score;
use crate::models::RankedPlayer;
use crate::weights::WeightTable;

/// Hard cap on the length of a ranked list
pub const MAX_RANKED_PLAYERS: usize = 50;

/// Score, filter, sort and rank one position's records.
///
/// Records scoring 0 or less (or NaN) are dropped. The rest are sorted by
/// descending score with ties kept in input order, truncated to
/// [`MAX_RANKED_PLAYERS`], and numbered from 1; `id` mirrors `rank`.
pub fn rank_players(records: &[PlayerRecord], table: &WeightTable) -> Vec<RankedPlayer> {
    let mut scored: Vec<(f64, &PlayerRecord)> = records
        .iter()
        .map(|record| (composite_score(record, table), record))
        .filter(|(score, _)| *score > 0.0)
        .collect();

    // Stable sort, so equal scores keep their input order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(MAX_RANKED_PLAYERS);

    scored
        .into_iter()
        .zip(1u32..)
        .map(|((score, record), rank)| RankedPlayer {
            id: rank,
            rank,
            record: record.clone(),
            composite_score: score,
        })
        .collect()
}
