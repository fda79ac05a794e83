//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog query settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Keywords to highlight in rendered titles and summaries.
    /// Not used to filter catalog results.
    #[serde(default = "defaults::keywords")]
    pub keywords: Vec<String>,

    /// Output directory and file naming
    #[serde(default)]
    pub output: OutputConfig,

    /// Persistent store settings
    #[serde(default)]
    pub store: StoreConfig,

    /// HTTP client settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Full path of the store database file, inside the output directory.
    pub fn store_path(&self) -> PathBuf {
        Path::new(&self.output.dir).join(&self.store.db_file)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.search.category.trim().is_empty() {
            return Err(AppError::validation("search.category is empty"));
        }
        if self.search.max_results == 0 {
            return Err(AppError::validation("search.max_results must be > 0"));
        }
        if self.keywords.is_empty() {
            return Err(AppError::validation("No keywords defined"));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(AppError::validation("Empty keyword in keyword list"));
        }
        if self.output.file_prefix.trim().is_empty() {
            return Err(AppError::validation("output.file_prefix is empty"));
        }
        if self.store.db_file.trim().is_empty() {
            return Err(AppError::validation("store.db_file is empty"));
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            keywords: defaults::keywords(),
            output: OutputConfig::default(),
            store: StoreConfig::default(),
            fetcher: FetcherConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Catalog query settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Category to query (e.g. "quant-ph")
    #[serde(default = "defaults::category")]
    pub category: String,

    /// Maximum number of results per query
    #[serde(default = "defaults::max_results")]
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            category: defaults::category(),
            max_results: defaults::max_results(),
        }
    }
}

/// Output directory and file naming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the digest files and the store live in
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Digest filename prefix, combined with the run date
    #[serde(default = "defaults::file_prefix")]
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            file_prefix: defaults::file_prefix(),
        }
    }
}

/// Persistent store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Database filename, relative to the output directory
    #[serde(default = "defaults::db_file")]
    pub db_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_file: defaults::db_file(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Catalog query endpoint
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Search defaults
    pub fn category() -> String {
        "quant-ph".into()
    }
    pub fn max_results() -> u32 {
        100
    }

    // Keyword defaults
    pub fn keywords() -> Vec<String> {
        [
            "photon",
            "photonic",
            "nonlinear",
            "spdc",
            "sfwm",
            "lithium niobate",
            "integrated",
            "chip",
            "sensing",
            "metrology",
            "cram\\'er",
            "estimation",
            "tomography",
            "povm",
            "fidelity",
            "shadow",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    // Output defaults
    pub fn output_dir() -> String {
        "arxiv".into()
    }
    pub fn file_prefix() -> String {
        "arxiv".into()
    }

    // Store defaults
    pub fn db_file() -> String {
        "processed_articles.db".into()
    }

    // Fetcher defaults
    pub fn base_url() -> String {
        "http://export.arxiv.org/api/query".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; arxiv-digest/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_category() {
        let mut config = Config::default();
        config.search.category = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_result_cap() {
        let mut config = Config::default();
        config.search.max_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_keyword() {
        let mut config = Config::default();
        config.keywords.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config.search.category, "quant-ph");
        assert_eq!(config.search.max_results, 100);
    }

    #[test]
    fn store_path_is_inside_output_dir() {
        let config = Config::default();
        assert_eq!(
            config.store_path(),
            Path::new("arxiv").join("processed_articles.db")
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [search]
            category = "cs.LG"
            "#,
        )
        .unwrap();
        assert_eq!(config.search.category, "cs.LG");
        assert_eq!(config.search.max_results, 100);
        assert!(!config.keywords.is_empty());
    }
}
