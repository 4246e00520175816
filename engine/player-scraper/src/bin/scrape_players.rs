use anyhow::Result;
use player_scraper::{LiveStatsProvider, Metric, Position, ScraperConfig, SeasonCache, StatsProvider};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ScraperConfig::from_env();
    info!("Starting season data scrape for {}...", config.season);

    let cache = match std::env::var("RANKINGS_CACHE_FILE") {
        Ok(path) => SeasonCache::new(path),
        Err(_) => SeasonCache::default(),
    };
    let provider = LiveStatsProvider::new(config, cache)?;

    // Scrape, merge and write the cache file
    let data = provider.fetch_all_positions().await?;

    for position in Position::ALL {
        let players = data.players(position);

        println!("\nTop 5 {} by fantasy points per game:", position);
        println!("{:<4} {:<24} {:<5} {:<8}", "#", "Name", "Team", "PPG");
        println!("{}", "-".repeat(44));

        let mut by_ppg: Vec<_> = players.iter().collect();
        by_ppg.sort_by(|a, b| {
            let a = a.metric(Metric::FantasyPpg).unwrap_or(0.0);
            let b = b.metric(Metric::FantasyPpg).unwrap_or(0.0);
            b.total_cmp(&a)
        });

        for (i, player) in by_ppg.iter().take(5).enumerate() {
            println!(
                "{:<4} {:<24} {:<5} {:<8.1}",
                i + 1,
                player.name,
                player.team,
                player.metric(Metric::FantasyPpg).unwrap_or(0.0)
            );
        }
    }

    println!("\nSummary:");
    println!("- Total players: {}", data.total_players());
    println!("- Cache file: {}", provider.cache().path().display());

    info!("Scraping completed successfully!");
    Ok(())
}
