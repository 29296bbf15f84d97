//! Configuration management for the vecview client.
//!
//! Sources are layered, later ones winning:
//! - Built-in defaults
//! - A YAML config file (`--config`, `VECVIEW_CONFIG`, or `.vecview/config.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! Nothing here is written back; the session only ever reads configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::logging::LogFormat;

/// Base URL used when nothing else is configured (the store's default port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8008";

/// Neighbor count pre-filled into searches.
pub const DEFAULT_K: u32 = 5;

/// Config file looked up relative to the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".vecview/config.yaml";

/// How late HTTP completions are treated when a newer request has been issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Drop completions whose collection or request is no longer current.
    #[default]
    DiscardStale,
    /// Apply every completion in arrival order, whatever it belonged to.
    LastArrivedWins,
}

impl StalePolicy {
    /// Parse a policy name as written in config files and flags.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "discard-stale" | "discard" => Some(Self::DiscardStale),
            "last-arrived-wins" | "last-wins" => Some(Self::LastArrivedWins),
            _ => None,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file the values were merged from, if any
    pub config_file: Option<PathBuf>,

    /// Base URL of the vector-store service
    pub base_url: String,

    /// Neighbor count used when a search does not give one
    pub default_k: u32,

    /// `limit` sent to the documents endpoint (server default when unset)
    pub documents_limit: Option<u32>,

    /// Handling of completions that arrive after a newer request
    pub stale_policy: StalePolicy,

    /// Per-request timeout; the transport default applies when unset
    pub request_timeout_secs: Option<u64>,

    /// Log level override
    pub log_level: Option<String>,

    /// Log output format
    pub log_format: LogFormat,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    connection: Option<ConnectionSection>,
    search: Option<SearchSection>,
    documents: Option<DocumentsSection>,
    browser: Option<BrowserSection>,
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConnectionSection {
    #[serde(rename = "baseUrl")]
    base_url: Option<String>,
    #[serde(rename = "timeoutSecs")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchSection {
    #[serde(rename = "defaultK")]
    default_k: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentsSection {
    limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BrowserSection {
    #[serde(rename = "stalePolicy")]
    stale_policy: Option<StalePolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    format: Option<LogFormat>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_k: DEFAULT_K,
            documents_limit: None,
            stale_policy: StalePolicy::default(),
            request_timeout_secs: None,
            log_level: None,
            log_format: LogFormat::default(),
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default locations and the environment.
    ///
    /// Environment variables:
    /// - `VECVIEW_CONFIG`: Path to config file
    /// - `VECVIEW_URL`: Base URL of the store
    /// - `VECVIEW_K`: Default neighbor count
    /// - `VECVIEW_STALE_POLICY`: `discard-stale` or `last-arrived-wins`
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use vecview_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Store: {}", config.base_url);
    /// ```
    pub fn load() -> AppResult<Self> {
        let explicit = std::env::var("VECVIEW_CONFIG").ok().map(PathBuf::from);
        Self::load_with(explicit.as_deref())
    }

    /// Load configuration using an explicit config file if given.
    ///
    /// An explicit file must exist; the default location is optional.
    pub fn load_with(config_file: Option<&Path>) -> AppResult<Self> {
        let mut config = Self::default();

        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config = config.merge_yaml(path)?;
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    config = config.merge_yaml(default_path)?;
                } else {
                    tracing::debug!("No config file at {}, using defaults", DEFAULT_CONFIG_PATH);
                }
            }
        }

        // Environment variables override YAML config
        if let Ok(url) = std::env::var("VECVIEW_URL") {
            tracing::debug!("Base URL from VECVIEW_URL: {}", url);
            config.base_url = url;
        }

        if let Ok(k) = std::env::var("VECVIEW_K") {
            config.default_k = k.trim().parse().map_err(|_| {
                AppError::Config(format!("VECVIEW_K must be a positive integer, got '{}'", k))
            })?;
        }

        if let Ok(policy) = std::env::var("VECVIEW_STALE_POLICY") {
            config.stale_policy = StalePolicy::parse(&policy).ok_or_else(|| {
                AppError::Config(format!(
                    "VECVIEW_STALE_POLICY must be discard-stale or last-arrived-wins, got '{}'",
                    policy
                ))
            })?;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        tracing::debug!("Merging config file {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let mut result = self.merge_yaml_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        result.config_file = Some(path.to_path_buf());
        Ok(result)
    }

    fn merge_yaml_str(&self, contents: &str) -> AppResult<Self> {
        // An empty file deserializes to null rather than an empty mapping
        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(contents)?
        };

        let mut result = self.clone();

        if let Some(connection) = config_file.connection {
            if let Some(url) = connection.base_url {
                result.base_url = url;
            }
            if connection.timeout_secs.is_some() {
                result.request_timeout_secs = connection.timeout_secs;
            }
        }

        if let Some(k) = config_file.search.and_then(|s| s.default_k) {
            result.default_k = k;
        }

        if let Some(limit) = config_file.documents.and_then(|d| d.limit) {
            result.documents_limit = Some(limit);
        }

        if let Some(policy) = config_file.browser.and_then(|b| b.stale_policy) {
            result.stale_policy = policy;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(format) = logging.format {
                result.log_format = format;
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Flags take precedence over both the config file and the environment.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate the merged configuration.
    ///
    /// URL well-formedness is not checked here: a malformed
    /// base URL surfaces as a transport error on the first request.
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("Base URL must not be empty".to_string()));
        }

        if self.default_k == 0 {
            return Err(AppError::Config(
                "Default k must be at least 1".to_string(),
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(AppError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:8008");
        assert_eq!(config.default_k, 5);
        assert_eq!(config.documents_limit, None);
        assert_eq!(config.stale_policy, StalePolicy::DiscardStale);
        assert!(!config.verbose);
        assert!(!config.no_color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(Some("http://store:9000".to_string()), None, true, false);

        assert_eq!(overridden.base_url, "http://store:9000");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_verbose_keeps_explicit_level() {
        let overridden =
            AppConfig::default().with_overrides(None, Some("trace".to_string()), true, true);
        assert_eq!(overridden.log_level, Some("trace".to_string()));
        assert!(overridden.no_color);
    }

    #[test]
    fn test_merge_yaml_str() {
        let yaml = r#"
connection:
  baseUrl: http://vectors.internal:8008
  timeoutSecs: 15
search:
  defaultK: 10
documents:
  limit: 0
browser:
  stalePolicy: last-arrived-wins
logging:
  level: debug
  format: json
  color: false
"#;
        let merged = AppConfig::default().merge_yaml_str(yaml).unwrap();
        assert_eq!(merged.base_url, "http://vectors.internal:8008");
        assert_eq!(merged.request_timeout_secs, Some(15));
        assert_eq!(merged.default_k, 10);
        assert_eq!(merged.documents_limit, Some(0));
        assert_eq!(merged.stale_policy, StalePolicy::LastArrivedWins);
        assert_eq!(merged.log_level, Some("debug".to_string()));
        assert_eq!(merged.log_format, LogFormat::Json);
        assert!(merged.no_color);
    }

    #[test]
    fn test_merge_partial_yaml_keeps_defaults() {
        let merged = AppConfig::default()
            .merge_yaml_str("search:\n  defaultK: 3\n")
            .unwrap();
        assert_eq!(merged.default_k, 3);
        assert_eq!(merged.base_url, DEFAULT_BASE_URL);
        assert_eq!(merged.stale_policy, StalePolicy::DiscardStale);
    }

    #[test]
    fn test_merge_empty_yaml() {
        let merged = AppConfig::default().merge_yaml_str("").unwrap();
        assert_eq!(merged.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_merge_yaml_file_records_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "connection:\n  baseUrl: http://from-file:1234").unwrap();

        let merged = AppConfig::default().merge_yaml(file.path()).unwrap();
        assert_eq!(merged.base_url, "http://from-file:1234");
        assert_eq!(merged.config_file.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "connection: [not, a, mapping").unwrap();

        let err = AppConfig::default().merge_yaml(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let err = AppConfig::load_with(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_rejects_zero_k() {
        let mut config = AppConfig::default();
        config.default_k = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = AppConfig::default();
        config.base_url = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stale_policy_parsing() {
        assert_eq!(StalePolicy::parse("discard-stale"), Some(StalePolicy::DiscardStale));
        assert_eq!(
            StalePolicy::parse("Last-Arrived-Wins"),
            Some(StalePolicy::LastArrivedWins)
        );
        assert_eq!(StalePolicy::parse("whatever"), None);
    }
}
