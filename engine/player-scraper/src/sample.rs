//! Built-in season sample used when no live source produces data

use crate::types::{Metric, PlayerRecord, Position, PositionData};

fn qb(name: &str, team: &str, line: [f64; 10]) -> PlayerRecord {
    let [att, yds, td, int, cmp_pct, ypa, rush_yds, rush_td, ppg, pts] = line;
    PlayerRecord::new(name, team, Position::Qb)
        .with(Metric::PassAttempts, att)
        .with(Metric::PassYards, yds)
        .with(Metric::PassTds, td)
        .with(Metric::PassInts, int)
        .with(Metric::CompletionPercentage, cmp_pct)
        .with(Metric::YardsPerAttempt, ypa)
        .with(Metric::RushYards, rush_yds)
        .with(Metric::RushTds, rush_td)
        .with(Metric::FantasyPpg, ppg)
        .with(Metric::FantasyPoints, pts)
}

fn rb(name: &str, team: &str, line: [f64; 11]) -> PlayerRecord {
    let [att, yds, td, ypr, tgt, rec, rec_yds, rec_td, catch, ppg, pts] = line;
    PlayerRecord::new(name, team, Position::Rb)
        .with(Metric::RushAttempts, att)
        .with(Metric::RushYards, yds)
        .with(Metric::RushTds, td)
        .with(Metric::YardsPerRush, ypr)
        .with(Metric::Targets, tgt)
        .with(Metric::Receptions, rec)
        .with(Metric::RecYards, rec_yds)
        .with(Metric::RecTds, rec_td)
        .with(Metric::CatchRate, catch)
        .with(Metric::FantasyPpg, ppg)
        .with(Metric::FantasyPoints, pts)
}

fn receiver(name: &str, team: &str, position: Position, line: [f64; 8]) -> PlayerRecord {
    let [tgt, rec, yds, td, ypr, catch, ppg, pts] = line;
    PlayerRecord::new(name, team, position)
        .with(Metric::Targets, tgt)
        .with(Metric::Receptions, rec)
        .with(Metric::RecYards, yds)
        .with(Metric::RecTds, td)
        .with(Metric::YardsPerReception, ypr)
        .with(Metric::CatchRate, catch)
        .with(Metric::FantasyPpg, ppg)
        .with(Metric::FantasyPoints, pts)
}

/// Five players per position with full stat lines
pub fn generate_sample_data() -> PositionData {
    let mut data = PositionData {
        qb: vec![
            qb("josh allen", "BUF", [565.0, 4306.0, 35.0, 14.0, 63.3, 7.6, 762.0, 15.0, 24.8, 421.6]),
            qb("patrick mahomes", "KC", [597.0, 4183.0, 31.0, 8.0, 66.3, 7.0, 389.0, 5.0, 23.1, 392.7]),
            qb("justin fields", "CHI", [318.0, 2242.0, 16.0, 9.0, 60.4, 7.1, 1143.0, 8.0, 19.8, 336.6]),
            qb("jalen hurts", "PHI", [538.0, 3858.0, 23.0, 15.0, 65.4, 7.2, 605.0, 15.0, 22.5, 382.5]),
            qb("lamar jackson", "BAL", [401.0, 3218.0, 24.0, 7.0, 64.7, 8.0, 821.0, 5.0, 21.9, 372.3]),
        ],
        rb: vec![
            rb(
                "christian mccaffrey",
                "SF",
                [272.0, 1459.0, 14.0, 5.4, 67.0, 53.0, 537.0, 7.0, 79.1, 25.2, 428.4],
            ),
            rb(
                "austin ekeler",
                "LAC",
                [179.0, 628.0, 5.0, 3.5, 94.0, 74.0, 628.0, 5.0, 78.7, 18.9, 321.3],
            ),
            rb(
                "derrick henry",
                "TEN",
                [276.0, 1167.0, 12.0, 4.2, 33.0, 28.0, 214.0, 0.0, 84.8, 18.1, 307.7],
            ),
            rb(
                "saquon barkley",
                "NYG",
                [247.0, 962.0, 6.0, 3.9, 76.0, 57.0, 338.0, 0.0, 75.0, 16.8, 285.6],
            ),
            rb(
                "alvin kamara",
                "NO",
                [180.0, 728.0, 5.0, 4.0, 75.0, 57.0, 490.0, 2.0, 76.0, 16.5, 280.5],
            ),
        ],
        wr: vec![
            receiver("tyreek hill", "MIA", Position::Wr, [171.0, 119.0, 1799.0, 13.0, 15.1, 69.6, 22.4, 380.8]),
            receiver("cee dee lamb", "DAL", Position::Wr, [156.0, 107.0, 1351.0, 9.0, 12.6, 68.6, 20.1, 341.7]),
            receiver("amari cooper", "CLE", Position::Wr, [132.0, 72.0, 1250.0, 5.0, 17.4, 54.5, 18.9, 321.3]),
            receiver("aj brown", "PHI", Position::Wr, [146.0, 106.0, 1496.0, 7.0, 14.1, 72.6, 18.7, 317.9]),
            receiver("stefon diggs", "BUF", Position::Wr, [160.0, 107.0, 1183.0, 8.0, 11.1, 66.9, 18.5, 314.5]),
        ],
        te: vec![
            receiver("travis kelce", "KC", Position::Te, [121.0, 93.0, 984.0, 5.0, 10.6, 76.9, 18.2, 309.4]),
            receiver("sam laporta", "DET", Position::Te, [120.0, 86.0, 889.0, 10.0, 10.3, 71.7, 16.8, 285.6]),
            receiver("george kittle", "SF", Position::Te, [90.0, 65.0, 1020.0, 6.0, 15.7, 72.2, 16.2, 275.4]),
            receiver("dallas goedert", "PHI", Position::Te, [98.0, 59.0, 592.0, 3.0, 10.0, 60.2, 12.8, 217.6]),
            receiver("evan engram", "JAX", Position::Te, [111.0, 73.0, 766.0, 4.0, 10.5, 65.8, 12.5, 212.5]),
        ],
        last_updated: None,
    };
    data.touch();
    data
}
