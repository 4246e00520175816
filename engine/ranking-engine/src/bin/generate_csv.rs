//! Write the per-position rankings (and optionally ADP) as CSV files for the
//! static frontend

use clap::Parser;
use player_scraper::{AdpProvider, AdpScraper, Position};
use ranking_engine::export::{export_adp, export_rankings};
use ranking_engine::{RankingConfig, RankingEngine};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "generate-csv")]
#[command(about = "Generate rankings CSV files for the frontend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "frontend/public/data")]
    out: PathBuf,

    /// Also scrape ADP tables and write adp-rankings.csv
    #[arg(long)]
    with_adp: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = RankingConfig::from_env()?;
    let engine = RankingEngine::from_config(&config)?;

    info!("Starting CSV data generation into {}", cli.out.display());

    for position in Position::ALL {
        let players = engine.rank(position).await;
        export_rankings(&cli.out, position, &players)?;
    }

    if cli.with_adp {
        let adp = AdpScraper::new(config.scraper.clone())?;
        let mut entries = Vec::new();
        for position in Position::ALL {
            entries.extend(adp.adp(position).await);
        }
        export_adp(&cli.out, &entries)?;
    }

    println!("CSV data generation completed. Files saved to: {}", cli.out.display());
    Ok(())
}
