use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::merge::merge_fantasy;
use crate::normalize::{normalize_player_name, team_abbreviation};
use crate::types::{parse_number_or_zero, Metric, PlayerRecord, Position, PositionData};

/// Season statistics scraper.
///
/// Pulls the passing, rushing and receiving tables from the stats site and the
/// per-position fantasy tables from the fantasy site, then merges them into
/// one bundle of records per position.
pub struct StatsScraper {
    client: Client,
    config: ScraperConfig,
}

impl StatsScraper {
    /// Create a new stats scraper
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch a page and return its body
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String> {
        info!("Fetching data from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP request failed with status: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        info!("Successfully fetched HTML ({} bytes)", html.len());
        Ok(html)
    }

    /// Fetch one table and parse it, logging and returning nothing on failure
    async fn fetch_table<F>(&self, label: &str, url: String, parse: F) -> Vec<PlayerRecord>
    where
        F: FnOnce(&str) -> Result<Vec<PlayerRecord>>,
    {
        let result = match self.fetch_page(&url).await {
            Ok(html) => parse(&html),
            Err(e) => Err(e),
        };

        match result {
            Ok(players) => {
                info!("Fetched {} {} rows", players.len(), label);
                players
            }
            Err(e) => {
                warn!("Error fetching {}: {:#}", label, e);
                Vec::new()
            }
        }
    }

    pub async fn fetch_passing(&self) -> Vec<PlayerRecord> {
        let url = format!("{}/passing.htm", self.config.stats_base_url);
        self.fetch_table("passing", url, parse_passing_table).await
    }

    pub async fn fetch_rushing(&self) -> Vec<PlayerRecord> {
        let url = format!("{}/rushing.htm", self.config.stats_base_url);
        self.fetch_table("rushing", url, parse_rushing_table).await
    }

    pub async fn fetch_receiving(&self) -> Vec<PlayerRecord> {
        let url = format!("{}/receiving.htm", self.config.stats_base_url);
        self.fetch_table("receiving", url, parse_receiving_table).await
    }

    pub async fn fetch_fantasy(&self, position: Position) -> Vec<PlayerRecord> {
        let url = format!("{}/{}.php", self.config.fantasy_base_url, position.slug());
        let label = format!("{position} fantasy");
        self.fetch_table(&label, url, |html| parse_fantasy_table(html, position)).await
    }

    /// Scrape every source concurrently and merge by position.
    ///
    /// Returns `None` when none of the three stat tables produced a row, which
    /// the caller treats as "no real data available".
    pub async fn fetch_all(&self) -> Option<PositionData> {
        info!("Starting comprehensive data fetch for {} season", self.config.season);

        let (passing, rushing, receiving, fantasy_qb, fantasy_rb, fantasy_wr, fantasy_te) =
            tokio::join!(
                self.fetch_passing(),
                self.fetch_rushing(),
                self.fetch_receiving(),
                self.fetch_fantasy(Position::Qb),
                self.fetch_fantasy(Position::Rb),
                self.fetch_fantasy(Position::Wr),
                self.fetch_fantasy(Position::Te),
            );

        if passing.is_empty() && rushing.is_empty() && receiving.is_empty() {
            warn!("No stat table produced any rows");
            return None;
        }

        let (receiving_wr, receiving_te): (Vec<_>, Vec<_>) = receiving
            .into_iter()
            .filter(|r| matches!(r.position, Position::Wr | Position::Te))
            .partition(|r| r.position == Position::Wr);
        let rushing_rb: Vec<_> =
            rushing.into_iter().filter(|r| r.position == Position::Rb).collect();

        let mut data = PositionData {
            qb: merge_fantasy(passing, &fantasy_qb),
            rb: merge_fantasy(rushing_rb, &fantasy_rb),
            wr: merge_fantasy(receiving_wr, &fantasy_wr),
            te: merge_fantasy(receiving_te, &fantasy_te),
            last_updated: None,
        };
        data.touch();

        info!(
            "Merged {} QB, {} RB, {} WR, {} TE records",
            data.qb.len(),
            data.rb.len(),
            data.wr.len(),
            data.te.len()
        );

        Some(data)
    }
}

/// Integer cell, read the way the stat tables are usually read: leading integer
/// part, anything unparsable is 0
fn int_cell(text: &str) -> f64 {
    parse_number_or_zero(text).trunc()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Failed to create selector '{css}': {e}"))
}

/// Collect a row's cells keyed by their `data-stat` attribute
fn stat_cells(row: ElementRef<'_>, cell_selector: &Selector) -> HashMap<String, String> {
    row.select(cell_selector)
        .filter_map(|cell| {
            let stat = cell.value().attr("data-stat")?;
            Some((stat.to_string(), cell.text().collect::<String>().trim().to_string()))
        })
        .collect()
}

/// Rows of the stats table with the given id, as `data-stat` maps
fn stat_table_rows(html: &str, table_id: &str) -> Result<Vec<HashMap<String, String>>> {
    let document = Html::parse_document(html);
    let row_selector = selector(&format!("#{table_id} tbody tr"))?;
    let cell_selector = selector("td")?;

    Ok(document.select(&row_selector).map(|row| stat_cells(row, &cell_selector)).collect())
}

fn cell<'a>(cells: &'a HashMap<String, String>, stat: &str) -> &'a str {
    cells.get(stat).map(String::as_str).unwrap_or("")
}

/// Position column of the rushing/receiving tables. An empty column falls back
/// to `default`; anything that is not one of the four positions is skipped.
fn row_position(cells: &HashMap<String, String>, default: Position) -> Option<Position> {
    let pos = cell(cells, "pos");
    if pos.is_empty() {
        Some(default)
    } else {
        pos.parse().ok()
    }
}

/// Parse the season passing table into QB records
pub fn parse_passing_table(html: &str) -> Result<Vec<PlayerRecord>> {
    let mut players = Vec::new();

    for cells in stat_table_rows(html, "passing")? {
        let name = cell(&cells, "name_display");
        let team = cell(&cells, "team_name_abbr");
        let attempts = int_cell(cell(&cells, "pass_att"));

        if name.is_empty() || team.is_empty() || attempts <= 0.0 {
            continue;
        }

        let completions = int_cell(cell(&cells, "pass_cmp"));
        let yards = int_cell(cell(&cells, "pass_yds"));

        let record = PlayerRecord::new(normalize_player_name(name), team_abbreviation(team), Position::Qb)
            .with(Metric::PassAttempts, attempts)
            .with(Metric::PassCompletions, completions)
            .with(Metric::PassYards, yards)
            .with(Metric::PassTds, int_cell(cell(&cells, "pass_td")))
            .with(Metric::PassInts, int_cell(cell(&cells, "pass_int")))
            .with(Metric::Sacks, int_cell(cell(&cells, "pass_sacked")))
            .with(Metric::SackYards, int_cell(cell(&cells, "pass_sacked_yds")))
            .with(Metric::RushYards, int_cell(cell(&cells, "rush_yds")))
            .with(Metric::RushTds, int_cell(cell(&cells, "rush_td")))
            .with(Metric::CompletionPercentage, round1(completions / attempts * 100.0))
            .with(Metric::YardsPerAttempt, round1(yards / attempts));

        players.push(record);
    }

    Ok(players)
}

/// Parse the season rushing table. Records keep the table's position column.
pub fn parse_rushing_table(html: &str) -> Result<Vec<PlayerRecord>> {
    let mut players = Vec::new();

    for cells in stat_table_rows(html, "rushing")? {
        let name = cell(&cells, "name_display");
        let team = cell(&cells, "team_name_abbr");
        let attempts = int_cell(cell(&cells, "rush_att"));

        if name.is_empty() || team.is_empty() || attempts <= 0.0 {
            continue;
        }

        let Some(position) = row_position(&cells, Position::Rb) else {
            continue;
        };

        let record = PlayerRecord::new(normalize_player_name(name), team_abbreviation(team), position)
            .with(Metric::RushAttempts, attempts)
            .with(Metric::RushYards, int_cell(cell(&cells, "rush_yds")))
            .with(Metric::RushTds, int_cell(cell(&cells, "rush_td")))
            .with(Metric::RushFirstDowns, int_cell(cell(&cells, "rush_1st")))
            .with(Metric::RushLong, int_cell(cell(&cells, "rush_long")))
            .with(Metric::YardsPerRush, parse_number_or_zero(cell(&cells, "rush_yds_per_att")));

        players.push(record);
    }

    Ok(players)
}

/// Parse the season receiving table. Records keep the table's position column.
pub fn parse_receiving_table(html: &str) -> Result<Vec<PlayerRecord>> {
    let mut players = Vec::new();

    for cells in stat_table_rows(html, "receiving")? {
        let name = cell(&cells, "name_display");
        let team = cell(&cells, "team_name_abbr");
        let targets = int_cell(cell(&cells, "targets"));

        if name.is_empty() || team.is_empty() || targets <= 0.0 {
            continue;
        }

        let Some(position) = row_position(&cells, Position::Wr) else {
            continue;
        };

        let receptions = int_cell(cell(&cells, "rec"));

        let record = PlayerRecord::new(normalize_player_name(name), team_abbreviation(team), position)
            .with(Metric::Targets, targets)
            .with(Metric::Receptions, receptions)
            .with(Metric::RecYards, int_cell(cell(&cells, "rec_yds")))
            .with(Metric::RecTds, int_cell(cell(&cells, "rec_td")))
            .with(Metric::RecFirstDowns, int_cell(cell(&cells, "rec_1st")))
            .with(Metric::RecLong, int_cell(cell(&cells, "rec_long")))
            .with(Metric::YardsPerReception, parse_number_or_zero(cell(&cells, "rec_yds_per_rec")))
            .with(Metric::CatchRate, round1(receptions / targets * 100.0));

        players.push(record);
    }

    Ok(players)
}

/// Parse a per-position fantasy table: name, team, fantasy points, points per game
pub fn parse_fantasy_table(html: &str, position: Position) -> Result<Vec<PlayerRecord>> {
    let document = Html::parse_document(html);
    let row_selector = selector("table tbody tr")?;
    let cell_selector = selector("td")?;

    let mut players = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> =
            row.select(&cell_selector).map(|c| c.text().collect::<String>().trim().to_string()).collect();
        let text = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");

        let name = text(0);
        let team = text(1);
        let fantasy_points = parse_number_or_zero(text(2));

        if name.is_empty() || team.is_empty() || fantasy_points <= 0.0 {
            continue;
        }

        players.push(
            PlayerRecord::new(normalize_player_name(name), team_abbreviation(team), position)
                .with(Metric::FantasyPoints, fantasy_points)
                .with(Metric::FantasyPpg, parse_number_or_zero(text(3))),
        );
    }

    Ok(players)
}
