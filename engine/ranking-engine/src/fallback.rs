//! Fixed two-player lists served when no real ranking can be produced

use player_scraper::{Metric, PlayerRecord, Position};

use crate::models::RankedPlayer;

fn ranked(rank: u32, record: PlayerRecord, composite_score: f64) -> RankedPlayer {
    RankedPlayer { id: rank, rank, record, composite_score }
}

fn receiver(name: &str, team: &str, position: Position, line: [f64; 5]) -> PlayerRecord {
    let [targets, receptions, yards, tds, ppg] = line;
    PlayerRecord::new(name, team, position)
        .with(Metric::Targets, targets)
        .with(Metric::Receptions, receptions)
        .with(Metric::RecYards, yards)
        .with(Metric::RecTds, tds)
        .with(Metric::FantasyPpg, ppg)
}

/// The engine's built-in list for a position
pub fn fallback_players(position: Position) -> Vec<RankedPlayer> {
    match position {
        Position::Qb => vec![
            ranked(
                1,
                PlayerRecord::new("josh allen", "BUF", Position::Qb)
                    .with(Metric::PassAttempts, 565.0)
                    .with(Metric::PassYards, 4306.0)
                    .with(Metric::PassTds, 35.0)
                    .with(Metric::PassInts, 14.0)
                    .with(Metric::RushYards, 762.0)
                    .with(Metric::RushTds, 15.0)
                    .with(Metric::FantasyPpg, 24.8),
                95.2,
            ),
            ranked(
                2,
                PlayerRecord::new("patrick mahomes", "KC", Position::Qb)
                    .with(Metric::PassAttempts, 597.0)
                    .with(Metric::PassYards, 4183.0)
                    .with(Metric::PassTds, 31.0)
                    .with(Metric::PassInts, 8.0)
                    .with(Metric::RushYards, 389.0)
                    .with(Metric::RushTds, 5.0)
                    .with(Metric::FantasyPpg, 23.1),
                92.8,
            ),
        ],
        Position::Rb => vec![
            ranked(
                1,
                PlayerRecord::new("christian mccaffrey", "SF", Position::Rb)
                    .with(Metric::RushAttempts, 272.0)
                    .with(Metric::RushYards, 1459.0)
                    .with(Metric::RushTds, 14.0)
                    .with(Metric::Targets, 67.0)
                    .with(Metric::Receptions, 53.0)
                    .with(Metric::RecYards, 537.0)
                    .with(Metric::RecTds, 7.0)
                    .with(Metric::FantasyPpg, 25.2),
                98.5,
            ),
            ranked(
                2,
                PlayerRecord::new("austin ekeler", "LAC", Position::Rb)
                    .with(Metric::RushAttempts, 179.0)
                    .with(Metric::RushYards, 628.0)
                    .with(Metric::RushTds, 5.0)
                    .with(Metric::Targets, 94.0)
                    .with(Metric::Receptions, 74.0)
                    .with(Metric::RecYards, 628.0)
                    .with(Metric::RecTds, 5.0)
                    .with(Metric::FantasyPpg, 18.9),
                89.3,
            ),
        ],
        Position::Wr => vec![
            ranked(1, receiver("tyreek hill", "MIA", position, [171.0, 119.0, 1799.0, 13.0, 22.4]), 96.8),
            ranked(2, receiver("cee dee lamb", "DAL", position, [156.0, 107.0, 1351.0, 9.0, 20.1]), 91.2),
        ],
        Position::Te => vec![
            ranked(1, receiver("travis kelce", "KC", position, [121.0, 93.0, 984.0, 5.0, 18.2]), 94.5),
            ranked(2, receiver("sam laporta", "DET", position, [120.0, 86.0, 889.0, 10.0, 16.8]), 89.7),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_two_ranked_players() {
        for position in Position::ALL {
            let players = fallback_players(position);
            assert_eq!(players.len(), 2);
            assert_eq!((players[0].rank, players[0].id), (1, 1));
            assert_eq!((players[1].rank, players[1].id), (2, 2));
            assert!(players[0].composite_score > players[1].composite_score);
            assert!(players.iter().all(|p| p.position() == position));
        }
    }

    #[test]
    fn test_qb_fallback_contents() {
        let players = fallback_players(Position::Qb);
        assert_eq!(players[0].name(), "josh allen");
        assert_eq!(players[0].composite_score, 95.2);
        assert_eq!(players[1].team(), "KC");
        assert_eq!(players[1].metric(Metric::CompletionPercentage), None);
    }
}
