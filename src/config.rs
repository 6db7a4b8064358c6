use std::collections::HashMap;
use thiserror::Error;

/// Peer list endpoints queried by the aggregator variant when none are configured.
pub const DEFAULT_PEER_URLS: [&str; 2] = [
    "http://localhost:8001/quotes/",
    "http://localhost:8002/quotes/",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub mode: ServiceMode,
    pub peer_urls: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMode {
    /// Serves only the local quote table.
    Standalone,
    /// Appends the peers' quote lists to the local one.
    Aggregator,
}

impl ServiceMode {
    pub fn default_port(&self) -> u16 {
        match self {
            ServiceMode::Aggregator => 8000,
            ServiceMode::Standalone => 8001,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let mode = match env_map
            .get("SERVICE_MODE")
            .map(|s| s.as_str())
            .unwrap_or("standalone")
        {
            "standalone" => ServiceMode::Standalone,
            "aggregator" => ServiceMode::Aggregator,
            other => {
                return Err(ConfigError::InvalidValue(
                    "SERVICE_MODE".to_string(),
                    format!("must be standalone or aggregator, got {}", other),
                ))
            }
        };

        let port = match env_map.get("PORT") {
            Some(s) => s.parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?,
            None => mode.default_port(),
        };

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "database.db".to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "DATABASE_PATH".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let peer_urls = match mode {
            ServiceMode::Standalone => Vec::new(),
            ServiceMode::Aggregator => parse_peer_urls_from_map(&env_map)?,
        };

        Ok(Config {
            port,
            database_path,
            mode,
            peer_urls,
        })
    }
}

fn parse_peer_urls_from_map(env_map: &HashMap<String, String>) -> Result<Vec<String>, ConfigError> {
    let Some(urls_str) = env_map.get("QUOTE_PEER_URLS") else {
        return Ok(DEFAULT_PEER_URLS.iter().map(|s| s.to_string()).collect());
    };

    let urls: Vec<String> = urls_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if let Some(bad) = urls
        .iter()
        .find(|u| !(u.starts_with("http://") || u.starts_with("https://")))
    {
        return Err(ConfigError::InvalidValue(
            "QUOTE_PEER_URLS".to_string(),
            format!("not an http(s) URL: {}", bad),
        ));
    }

    Ok(urls)
}
