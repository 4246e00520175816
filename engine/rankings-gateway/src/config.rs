//! Configuration for the rankings gateway

use crate::error::{GatewayError, GatewayResult};
use ranking_engine::RankingConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main configuration for the rankings gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Cross-origin configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Ranking engine and data source configuration
    #[serde(default)]
    pub rankings: RankingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// Cross-origin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: crate::DEFAULT_PORT }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl GatewayConfig {
    /// Get the server address
    pub fn server_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }

    /// Load configuration from file
    pub fn load_from_file(path: impl AsRef<Path>) -> GatewayResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GatewayConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> GatewayResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> GatewayResult<Self> {
        dotenv::dotenv().ok();

        let mut config = Self {
            rankings: RankingConfig::from_env().map_err(|e| GatewayError::Config(e.to_string()))?,
            ..Self::default()
        };

        if let Ok(host) = std::env::var("RANKINGS_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("PORT") {
            config.server.port =
                port.parse().map_err(|_| GatewayError::Config(format!("Invalid PORT: {port}")))?;
        }

        if let Ok(origins) = std::env::var("RANKINGS_CORS_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(level) = std::env::var("RANKINGS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = std::env::var("RANKINGS_LOG_FORMAT") {
            config.logging.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GatewayResult<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(GatewayError::Config(format!(
                    "Invalid log level: {}",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.as_str() {
            "json" | "pretty" | "compact" => {}
            _ => {
                return Err(GatewayError::Config(format!(
                    "Invalid log format: {}",
                    self.logging.format
                )))
            }
        }

        if let Some(origin) = self
            .cors
            .allowed_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(GatewayError::Config(format!("Invalid CORS origin: {}", origin)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.port, 5000);
        assert!(config.cors.allowed_origins.is_empty());
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_invalid_logging_rejected() {
        let mut config = GatewayConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = GatewayConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = GatewayConfig::default();
        config.cors.allowed_origins = vec!["localhost:3000".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gateway.toml");

        let mut config = GatewayConfig::default();
        config.server.port = 5050;
        config.cors.allowed_origins = vec!["http://localhost:3000".to_string()];
        config.logging.format = "json".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = GatewayConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.port, 5050);
        assert_eq!(loaded.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(loaded.logging.format, "json");
        assert_eq!(loaded.rankings.cache_file, config.rankings.cache_file);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gateway.toml");
        std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();

        let loaded = GatewayConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.host, "127.0.0.1");
        assert_eq!(loaded.server.port, 8080);
        assert_eq!(loaded.logging.level, "info");
    }
}
