//! CSV files consumed by the static frontend

use anyhow::{Context, Result};
use csv::Writer;
use player_scraper::{AdpEntry, Metric, Position};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::RankedPlayer;

const IDENTITY_COLUMNS: [&str; 5] = ["id", "rank", "name", "team", "position"];

const QB_METRICS: &[Metric] = &[
    Metric::PassAttempts,
    Metric::PassYards,
    Metric::PassTds,
    Metric::CompletionPercentage,
    Metric::YardsPerAttempt,
    Metric::RushYards,
    Metric::RushTds,
    Metric::FantasyPpg,
];

const RB_METRICS: &[Metric] = &[
    Metric::RushAttempts,
    Metric::RushYards,
    Metric::RushTds,
    Metric::YardsPerRush,
    Metric::Targets,
    Metric::Receptions,
    Metric::RecYards,
    Metric::RecTds,
    Metric::CatchRate,
    Metric::FantasyPpg,
];

const RECEIVER_METRICS: &[Metric] = &[
    Metric::Targets,
    Metric::Receptions,
    Metric::RecYards,
    Metric::RecTds,
    Metric::YardsPerReception,
    Metric::CatchRate,
    Metric::FantasyPpg,
];

const ADP_COLUMNS: [&str; 8] = ["id", "rank", "name", "team", "position", "adp", "byeWeek", "notes"];

/// Metric columns exported for a position, in file order
pub fn metric_columns(position: Position) -> &'static [Metric] {
    match position {
        Position::Qb => QB_METRICS,
        Position::Rb => RB_METRICS,
        Position::Wr | Position::Te => RECEIVER_METRICS,
    }
}

/// Full header row for a position's rankings file
pub fn headers(position: Position) -> Vec<&'static str> {
    IDENTITY_COLUMNS
        .iter()
        .copied()
        .chain(metric_columns(position).iter().map(|m| m.wire_name()))
        .chain(std::iter::once("compositeScore"))
        .collect()
}

/// Numeric cell; zero and missing values are left empty
fn number_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v.to_string(),
        _ => String::new(),
    }
}

fn count_cell(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

pub fn write_rankings<W: Write>(writer: W, position: Position, players: &[RankedPlayer]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(headers(position))?;

    for player in players {
        let mut row = vec![
            count_cell(player.id),
            count_cell(player.rank),
            player.name().to_string(),
            player.team().to_string(),
            player.position().to_string(),
        ];
        row.extend(metric_columns(position).iter().map(|m| number_cell(player.metric(*m))));
        row.push(number_cell(Some(player.composite_score)));

        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_adp<W: Write>(writer: W, entries: &[AdpEntry]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(ADP_COLUMNS)?;

    for entry in entries {
        wtr.write_record(&[
            entry.id.clone(),
            count_cell(entry.rank),
            entry.name.clone(),
            entry.team.clone(),
            entry.position.to_string(),
            number_cell(Some(entry.adp)),
            count_cell(entry.bye_week),
            entry.notes.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn create_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))
}

/// Write `{pos}-rankings.csv` into `dir`
pub fn export_rankings(dir: &Path, position: Position, players: &[RankedPlayer]) -> Result<PathBuf> {
    let path = dir.join(format!("{}-rankings.csv", position.slug()));
    write_rankings(create_file(&path)?, position, players)?;

    info!("Generated {} rankings with {} players", position, players.len());
    Ok(path)
}

/// Write every position's ADP entries into `dir/adp-rankings.csv`
pub fn export_adp(dir: &Path, entries: &[AdpEntry]) -> Result<PathBuf> {
    let path = dir.join("adp-rankings.csv");
    write_adp(create_file(&path)?, entries)?;

    info!("Generated ADP data with {} players", entries.len());
    Ok(path)
}
