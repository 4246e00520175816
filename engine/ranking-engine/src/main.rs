use player_scraper::Position;
use ranking_engine::{RankingConfig, RankingEngine};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("🚀 Ranking engine starting...");

    let config = RankingConfig::from_env()?;
    info!("Loaded configuration: {:?}", config);
    info!("Season: {}", config.scraper.season);

    let engine = RankingEngine::from_config(&config)?;

    for position in Position::ALL {
        let outcome = engine.rank_position(position).await;
        if let Some(reason) = outcome.fallback_reason() {
            warn!("{} rankings use the fallback list ({})", position, reason);
        }

        println!("\n{} rankings ({} players)", position, outcome.players().len());
        println!("{:<4} {:<24} {:<5} {:>10}", "Rank", "Name", "Team", "Score");
        println!("{}", "-".repeat(46));

        for player in outcome.players().iter().take(10) {
            println!(
                "{:<4} {:<24} {:<5} {:>10.2}",
                player.rank,
                player.name(),
                player.team(),
                player.composite_score
            );
        }
    }

    println!("\n🎉 Ranking completed");
    info!("Ranking completed!");
    Ok(())
}
