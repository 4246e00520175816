//! REST API endpoints for the rankings gateway
//!
//! This module provides the per-position ranking endpoints, ADP lookups,
//! the API index and health check. Every response is a JSON envelope.

use crate::config::CorsConfig;
use crate::error::{ApiFailure, GatewayError};
use player_scraper::{AdpEntry, AdpProvider, Position};
use ranking_engine::{RankedPlayer, RankingEngine};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};
use warp::http::StatusCode;
use warp::path::FullPath;
use warp::{Filter, Rejection, Reply};

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data, message: None }
    }

    fn with_message(data: T, message: String) -> Self {
        Self { success: true, data, message: Some(message) }
    }
}

/// Error response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into(), message: None, pathname: None }
    }
}

fn json_with_status<T: Serialize>(body: &T, status: StatusCode) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

fn failure(error: String, source: GatewayError) -> Rejection {
    error!("{}: {}", error, source);
    warp::reject::custom(ApiFailure { error, source })
}

/// Rank a position on a worker task so a panic surfaces as a 500
async fn ranked(
    engine: RankingEngine,
    position: Position,
    on_error: String,
) -> Result<Vec<RankedPlayer>, Rejection> {
    tokio::spawn(async move { engine.rank(position).await })
        .await
        .map_err(|e| failure(on_error, GatewayError::Handler(e.to_string())))
}

/// Get the full ranking for a position
pub async fn get_rankings(
    position: Position,
    engine: RankingEngine,
) -> Result<impl Reply, Rejection> {
    let players = ranked(engine, position, format!("Failed to fetch {} rankings", position)).await?;
    debug!("Serving {} {} rankings", players.len(), position);

    Ok(warp::reply::json(&ApiResponse::with_message(
        players,
        format!("{} rankings retrieved successfully", position),
    )))
}

/// Get one ranked player by its rank id
pub async fn get_player(
    position: Position,
    id: String,
    engine: RankingEngine,
) -> Result<warp::reply::Response, Rejection> {
    let players = ranked(engine, position, format!("Failed to fetch {}", position)).await?;

    let player = id.parse::<u32>().ok().and_then(|id| players.into_iter().find(|p| p.id == id));

    match player {
        Some(player) => Ok(json_with_status(&ApiResponse::ok(player), StatusCode::OK)),
        None => {
            debug!("{} with id {} not found", position, id);
            Ok(json_with_status(
                &ErrorResponse::new(format!("{} not found", position)),
                StatusCode::NOT_FOUND,
            ))
        }
    }
}

/// Get the ranked players of a position on one team (case-insensitive)
pub async fn get_team_players(
    position: Position,
    team: String,
    engine: RankingEngine,
) -> Result<impl Reply, Rejection> {
    let players =
        ranked(engine, position, format!("Failed to fetch {}s by team", position)).await?;

    let team_players: Vec<RankedPlayer> =
        players.into_iter().filter(|p| p.team().eq_ignore_ascii_case(&team)).collect();

    Ok(warp::reply::json(&ApiResponse::with_message(
        team_players,
        format!("{}s for team {} retrieved successfully", position, team),
    )))
}

/// Get the ADP board for a position
pub async fn get_adp(
    position: Position,
    adp: Arc<dyn AdpProvider>,
) -> Result<impl Reply, Rejection> {
    let entries: Vec<AdpEntry> = tokio::spawn(async move { adp.adp(position).await })
        .await
        .map_err(|e| {
            failure(format!("Failed to fetch {} ADP", position), GatewayError::Handler(e.to_string()))
        })?;

    Ok(warp::reply::json(&ApiResponse::ok(entries)))
}

/// Map handler failures to the 500 envelope; anything else falls through
pub async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Rejection> {
    if let Some(failure) = err.find::<ApiFailure>() {
        let body = ErrorResponse {
            message: Some(failure.source.to_string()),
            ..ErrorResponse::new(failure.error.clone())
        };
        return Ok(json_with_status(&body, StatusCode::INTERNAL_SERVER_ERROR));
    }

    Err(err)
}

fn not_found(path: FullPath) -> warp::reply::Response {
    let body = ErrorResponse {
        pathname: Some(path.as_str().to_string()),
        ..ErrorResponse::new("API endpoint not found")
    };
    json_with_status(&body, StatusCode::NOT_FOUND)
}

fn cors(config: &CorsConfig) -> warp::cors::Builder {
    let builder = if config.allowed_origins.is_empty() {
        warp::cors().allow_any_origin()
    } else {
        warp::cors().allow_origins(config.allowed_origins.iter().map(String::as_str))
    };

    builder
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
}

/// Create all REST API routes
pub fn create_routes(
    engine: RankingEngine,
    adp: Arc<dyn AdpProvider>,
    cors_config: &CorsConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let engine_filter = warp::any().map(move || engine.clone());
    let adp_filter = warp::any().map(move || adp.clone());

    // API index
    let index = warp::path::end().and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "message": "Fantasy Football Rankings API",
            "endpoints": {
                "qb": "/api/qb",
                "rb": "/api/rb",
                "wr": "/api/wr",
                "te": "/api/te",
                "health": "/api/health"
            }
        }))
    });

    // Health check endpoint
    let health = warp::path!("api" / "health").and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "OK",
            "message": "Fantasy Football Rankings API is running"
        }))
    });

    // ADP endpoint
    let adp_board = warp::path!("api" / "adp" / Position)
        .and(warp::get())
        .and(adp_filter)
        .and_then(get_adp);

    // Position rankings endpoint
    let rankings = warp::path!("api" / Position)
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(get_rankings);

    // Team filter endpoint
    let team = warp::path!("api" / Position / "team" / String)
        .and(warp::get())
        .and(engine_filter.clone())
        .and_then(get_team_players);

    // Single player endpoint
    let player = warp::path!("api" / Position / String)
        .and(warp::get())
        .and(engine_filter)
        .and_then(get_player);

    // Anything else, including unknown positions
    let fallthrough = warp::path::full().map(not_found);

    // Combine all routes
    index
        .or(health)
        .or(adp_board)
        .or(rankings)
        .or(team)
        .or(player)
        .recover(handle_rejection)
        .or(fallthrough)
        .with(cors(cors_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use player_scraper::{PositionData, SampleAdp, StaticStatsProvider, StatsProvider};
    use ranking_engine::WeightTables;
    use serde_json::Value;

    struct PanickingProvider;

    #[async_trait]
    impl StatsProvider for PanickingProvider {
        async fn fetch_all_positions(&self) -> Result<PositionData> {
            panic!("upstream exploded");
        }

        async fn load_cached_positions(&self) -> Result<Option<PositionData>> {
            Ok(None)
        }
    }

    struct PanickingAdp;

    #[async_trait]
    impl AdpProvider for PanickingAdp {
        async fn adp(&self, _position: Position) -> Vec<AdpEntry> {
            panic!("adp board exploded");
        }
    }

    fn sample_routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
        let engine =
            RankingEngine::new(Arc::new(StaticStatsProvider::sample()), WeightTables::standard());
        create_routes(engine, Arc::new(SampleAdp), &CorsConfig::default())
    }

    async fn get(path: &str) -> (StatusCode, Value) {
        let res = warp::test::request().method("GET").path(path).reply(&sample_routes()).await;
        let body = serde_json::from_slice(res.body()).unwrap();
        (res.status(), body)
    }

    #[tokio::test]
    async fn test_position_rankings() {
        let (status, body) = get("/api/qb").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "QB rankings retrieved successfully");

        let data = body["data"].as_array().unwrap();
        let names: Vec<&str> = data.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["justin fields", "josh allen", "lamar jackson", "jalen hurts", "patrick mahomes"]
        );
        assert_eq!(data[0]["rank"], 1);
        assert_eq!(data[0]["id"], 1);
        assert!(data[0]["compositeScore"].as_f64().unwrap() > 0.0);
        assert_eq!(data[0]["position"], "QB");
    }

    #[tokio::test]
    async fn test_position_segment_is_case_insensitive() {
        let (status, body) = get("/api/TE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "travis kelce");
    }

    #[tokio::test]
    async fn test_player_by_id() {
        let (status, body) = get("/api/wr/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "tyreek hill");
        assert_eq!(body["data"]["rank"], 1);
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn test_player_not_found() {
        let (status, body) = get("/api/rb/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "RB not found");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let (status, body) = get("/api/qb/abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "QB not found");
    }

    #[tokio::test]
    async fn test_team_filter() {
        let (status, body) = get("/api/wr/team/buf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "WRs for team buf retrieved successfully");

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "stefon diggs");
        assert_eq!(data[0]["team"], "BUF");

        let (_, body) = get("/api/wr/team/NYJ").await;
        assert!(body["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_adp_board() {
        let (status, body) = get("/api/adp/rb").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 8);
        assert_eq!(data[0]["rank"], 1);
        assert_eq!(data[0]["position"], "RB");
    }

    #[tokio::test]
    async fn test_health_and_index() {
        let (status, body) = get("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], "Fantasy Football Rankings API is running");

        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Fantasy Football Rankings API");
        assert_eq!(body["endpoints"]["qb"], "/api/qb");
        assert_eq!(body["endpoints"]["health"], "/api/health");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = get("/api/k").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "API endpoint not found");
        assert_eq!(body["pathname"], "/api/k");

        let (status, body) = get("/nope/at/all").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["pathname"], "/nope/at/all");
    }

    #[tokio::test]
    async fn test_panicking_provider_serves_fallback_list() {
        let engine = RankingEngine::new(Arc::new(PanickingProvider), WeightTables::standard());
        let routes = create_routes(engine, Arc::new(SampleAdp), &CorsConfig::default());

        let res = warp::test::request().path("/api/te").reply(&routes).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["success"], true);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["name"], "travis kelce");
        assert_eq!(data[1]["name"], "sam laporta");
    }

    #[tokio::test]
    async fn test_handler_failure_is_500() {
        let engine =
            RankingEngine::new(Arc::new(StaticStatsProvider::sample()), WeightTables::standard());
        let routes = create_routes(engine, Arc::new(PanickingAdp), &CorsConfig::default());

        let res = warp::test::request().path("/api/adp/wr").reply(&routes).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch WR ADP");
        assert!(body["message"].as_str().unwrap().contains("Handler failed"));
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let res = warp::test::request()
            .method("OPTIONS")
            .path("/api/qb")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "GET")
            .reply(&sample_routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("access-control-allow-origin"));
    }
}
