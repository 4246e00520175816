//! Average draft position rankings

use anyhow::Result;
use async_trait::async_trait;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::normalize::{clean_display_name, team_abbreviation};
use crate::scraper::{selector, StatsScraper};
use crate::types::{parse_number_or_zero, Position};

/// Fewer parsed rows than this means the page layout was not recognized
const MIN_LIVE_ENTRIES: usize = 5;

/// Name fragments that mark a row as a site/provider column rather than a player
const PROVIDER_TOKENS: [&str; 9] =
    ["sleeper", "cbs", "espn", "yahoo", "fantasypros", "nfl", "ffpc", "rtsports", "adp"];

/// One player's average draft position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdpEntry {
    /// "{pos}-{rank}", e.g. "qb-1"
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub adp: f64,
    pub bye_week: u32,
    pub notes: String,
}

impl AdpEntry {
    pub fn new(position: Position, rank: u32, name: &str, team: &str, adp: f64, bye_week: u32) -> Self {
        Self {
            id: format!("{}-{}", position.slug(), rank),
            rank,
            name: name.to_string(),
            team: team.to_string(),
            position,
            adp,
            bye_week,
            notes: String::new(),
        }
    }
}

/// Source of ADP rankings. Never fails: implementations degrade to sample data.
#[async_trait]
pub trait AdpProvider: Send + Sync {
    async fn adp(&self, position: Position) -> Vec<AdpEntry>;
}

/// Scrapes ADP tables from the fantasy site
pub struct AdpScraper {
    scraper: StatsScraper,
}

impl AdpScraper {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        Ok(Self { scraper: StatsScraper::new(config)? })
    }

    async fn fetch(&self, position: Position) -> Result<Vec<AdpEntry>> {
        let url = format!("{}/{}.php", self.scraper.config().adp_base_url, position.slug());
        let html = self.scraper.fetch_page(&url).await?;
        parse_adp_table(&html, position)
    }
}

#[async_trait]
impl AdpProvider for AdpScraper {
    async fn adp(&self, position: Position) -> Vec<AdpEntry> {
        info!("Fetching ADP data for {}...", position);

        match self.fetch(position).await {
            Ok(entries) if entries.len() >= MIN_LIVE_ENTRIES => {
                info!("Fetched {} {} ADP rankings", entries.len(), position);
                entries
            }
            Ok(entries) => {
                warn!(
                    "Only {} {} ADP rows parsed, using sample data",
                    entries.len(),
                    position
                );
                sample_adp(position)
            }
            Err(e) => {
                warn!("Error fetching {} ADP: {:#}", position, e);
                sample_adp(position)
            }
        }
    }
}

/// Serves the built-in sample lists without touching the network
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAdp;

#[async_trait]
impl AdpProvider for SampleAdp {
    async fn adp(&self, position: Position) -> Vec<AdpEntry> {
        sample_adp(position)
    }
}

/// Split "Brock Bowers LV (8)" into name, team and bye week.
///
/// The bye week is the trailing parenthesized number, the team is the 2-3
/// upper-case letter token before it, the name is everything else.
pub fn parse_player_info(info: &str) -> Option<(String, String, u32)> {
    let inner = info.trim().strip_suffix(')')?;
    let (before, bye) = inner.rsplit_once('(')?;
    if bye.is_empty() || !bye.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !before.ends_with(char::is_whitespace) {
        return None;
    }

    let (name, team) = before.trim_end().rsplit_once(char::is_whitespace)?;
    if !(2..=3).contains(&team.len()) || !team.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some((name.to_string(), team.to_string(), bye.parse().ok()?))
}

fn is_player_row(name: &str, team: &str, adp: f64) -> bool {
    let name_lower = name.to_lowercase();
    let team_lower = team.to_lowercase();

    !name.is_empty()
        && !team.is_empty()
        && adp > 0.0
        && name.chars().count() > 2
        && !PROVIDER_TOKENS.iter().any(|token| name_lower.contains(token))
        && !team_lower.contains("adp")
        && !team_lower.contains(&name_lower)
}

/// Parse an ADP page: column 0 rank, column 2 "Name TEAM (bye)", column 3 ADP
pub fn parse_adp_table(html: &str, position: Position) -> Result<Vec<AdpEntry>> {
    let document = Html::parse_document(html);
    let row_selector = selector("table tbody tr")?;
    let cell_selector = selector("td")?;

    let mut entries = Vec::new();

    for row in document.select(&row_selector) {
        let cells: Vec<String> =
            row.select(&cell_selector).map(|c| c.text().collect::<String>().trim().to_string()).collect();
        let text = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");

        let rank = parse_number_or_zero(text(0)).trunc().max(0.0) as u32;
        let adp = parse_number_or_zero(text(3));

        let Some((name, team, bye_week)) = parse_player_info(text(2)) else {
            continue;
        };
        let name = clean_display_name(&name);

        if !is_player_row(&name, &team, adp) {
            continue;
        }

        entries.push(AdpEntry::new(position, rank, &name, &team_abbreviation(&team), adp, bye_week));
    }

    Ok(entries)
}

/// Built-in ADP list used when the live table cannot be read
pub fn sample_adp(position: Position) -> Vec<AdpEntry> {
    let rows: [(&str, &str, f64, u32); 8] = match position {
        Position::Qb => [
            ("josh allen", "BUF", 12.5, 13),
            ("patrick mahomes", "KC", 15.2, 10),
            ("lamar jackson", "BAL", 18.8, 14),
            ("jalen hurts", "PHI", 22.1, 9),
            ("justin fields", "CHI", 25.3, 13),
            ("dak prescott", "DAL", 28.7, 7),
            ("justin herbert", "LAC", 31.2, 5),
            ("kyler murray", "ARI", 34.1, 14),
        ],
        Position::Rb => [
            ("christian mccaffrey", "SF", 1.2, 9),
            ("saquon barkley", "PHI", 3.8, 9),
            ("derrick henry", "BAL", 5.1, 14),
            ("austin ekeler", "LAC", 7.4, 5),
            ("alvin kamara", "NO", 9.2, 11),
            ("nick chubb", "CLE", 11.8, 5),
            ("joe mixon", "CIN", 13.5, 12),
            ("james cook", "BUF", 15.9, 13),
        ],
        Position::Wr => [
            ("tyreek hill", "MIA", 2.1, 11),
            ("cee dee lamb", "DAL", 4.3, 7),
            ("amari cooper", "CLE", 6.7, 5),
            ("aj brown", "PHI", 8.9, 9),
            ("stefon diggs", "BUF", 11.2, 13),
            ("mike evans", "TB", 13.8, 5),
            ("deebo samuel", "SF", 16.4, 9),
            ("keenan allen", "CHI", 18.7, 13),
        ],
        Position::Te => [
            ("travis kelce", "KC", 8.5, 10),
            ("sam laporta", "DET", 12.8, 9),
            ("george kittle", "SF", 15.3, 9),
            ("dallas goedert", "PHI", 18.7, 9),
            ("evan engram", "JAX", 21.4, 9),
            ("mark andrews", "BAL", 24.1, 14),
            ("t.j. hockenson", "MIN", 26.8, 6),
            ("cole kmet", "CHI", 29.5, 13),
        ],
    };

    rows.iter()
        .zip(1u32..)
        .map(|(&(name, team, adp, bye), rank)| AdpEntry::new(position, rank, name, team, adp, bye))
        .collect()
}
