//! REST API server for the fantasy football rankings

use player_scraper::{AdpProvider, AdpScraper};
use ranking_engine::RankingEngine;
use rankings_gateway::{logging, rest_api, GatewayConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("RANKINGS_GATEWAY_CONFIG") {
        Ok(path) => GatewayConfig::load_from_file(&path)?,
        Err(_) => GatewayConfig::from_env()?,
    };

    logging::initialize_logging(&config.logging)?;

    info!("Starting rankings API server v{}...", rankings_gateway::VERSION);
    info!("Season: {}", config.rankings.scraper.season);
    info!("Cache file: {}", config.rankings.cache_file.display());

    let engine = RankingEngine::from_config(&config.rankings)?;
    let adp: Arc<dyn AdpProvider> = Arc::new(AdpScraper::new(config.rankings.scraper.clone())?);

    let routes = rest_api::create_routes(engine, adp, &config.cors);

    let addr = config.server_addr()?;
    info!("Fantasy Football Rankings API listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    warp::serve(routes).run(addr).await;

    Ok(())
}
