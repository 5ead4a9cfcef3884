//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default, so an absent file or a partial file is
//! valid. Command-line flags are applied on top in `main`.
//!
//! ```yaml
//! news:
//!   endpoint: https://newsapi.org/v2/everything
//!   queries:
//!     - India smart city
//!     - India infrastructure
//!   page_size: 10
//!   rank: true
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid news endpoint {0}")]
    InvalidEndpoint(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub news: NewsConfig,
}

/// Parameters of the news fetch and processing pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// News-search endpoint URL.
    pub endpoint: String,
    /// One outbound request is issued per query.
    pub queries: Vec<String>,
    pub sort_by: String,
    pub language: String,
    pub page_size: u32,
    pub page: u32,
    /// Upper bound on processed articles kept in the feed.
    pub max_articles: usize,
    /// Run the relevance ranker before presenting.
    pub rank: bool,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            queries: vec![
                "India urban development".to_string(),
                "India smart city".to_string(),
                "India infrastructure".to_string(),
                "Indian cities problems".to_string(),
            ],
            sort_by: "publishedAt".to_string(),
            language: "en".to_string(),
            page_size: 10,
            page: 1,
            max_articles: 30,
            rank: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        info!(queries = config.news.queries.len(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.news.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.news.queries.len(), 4);
        assert_eq!(config.news.sort_by, "publishedAt");
        assert_eq!(config.news.language, "en");
        assert_eq!(config.news.page_size, 10);
        assert_eq!(config.news.page, 1);
        assert_eq!(config.news.max_articles, 30);
        assert!(!config.news.rank);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "news:\n  queries:\n    - Pune traffic\n  rank: true\n";
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.news.queries, vec!["Pune traffic".to_string()]);
        assert!(config.news.rank);
        assert_eq!(config.news.page_size, 10);
        assert_eq!(config.news.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_empty_yaml() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.news.max_articles, 30);
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/nonexistent/atlantis.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(AppConfig::from_yaml("news: [1, 2").is_err());
    }
}
