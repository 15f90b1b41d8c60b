//! Configuration management for the employee directory

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote demo API configuration
    #[serde(default)]
    pub remote_api: RemoteApiConfig,

    /// Employee listing configuration
    #[serde(default)]
    pub listing: ListingConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Durable preference storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Browser session retention
    #[serde(default)]
    pub sessions: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteApiConfig {
    /// Base URL of the demo API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `limit` sent with the employee collection request; the API default applies when unset
    #[serde(default)]
    pub fetch_limit: Option<u32>,

    /// Per-request timeout in seconds; requests never time out when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// Listing presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Rows per page in paged mode
    #[serde(default = "default_listing_page_size")]
    pub page_size: usize,

    /// Items revealed per load-more in incremental mode
    #[serde(default = "default_incremental_batch")]
    pub incremental_batch: usize,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Categories per page in the department panel (0 shows every category on one page)
    #[serde(default = "default_category_page_size")]
    pub category_page_size: usize,

    /// Upper bound (inclusive) of the random employee identifier
    #[serde(default = "default_random_employee_max_id")]
    pub random_employee_max_id: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding durable UI preferences
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
}

/// Session retention configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds without a request after which a session is dropped
    #[serde(default = "default_session_idle_secs")]
    pub idle_timeout_secs: u64,

    /// Upper bound on resident sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds between idle sweeps
    #[serde(default = "default_session_sweep_secs")]
    pub sweep_interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

const fn default_listing_page_size() -> usize {
    10
}

const fn default_incremental_batch() -> usize {
    20
}

const fn default_category_page_size() -> usize {
    6
}

const fn default_random_employee_max_id() -> u64 {
    100
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("./data/preferences.json")
}

const fn default_session_idle_secs() -> u64 {
    30 * 60
}

const fn default_max_sessions() -> usize {
    10_000
}

const fn default_session_sweep_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_limit: None,
            request_timeout_secs: None,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_listing_page_size(),
            incremental_batch: default_incremental_batch(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            category_page_size: default_category_page_size(),
            random_employee_max_id: default_random_employee_max_id(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_session_idle_secs(),
            max_sessions: default_max_sessions(),
            sweep_interval_secs: default_session_sweep_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from an optional `config` file and `DIRECTORY__*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("DIRECTORY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the application cannot run with
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.listing.page_size == 0 {
            return Err(crate::Error::Validation {
                field: "listing.page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.listing.incremental_batch == 0 {
            return Err(crate::Error::Validation {
                field: "listing.incremental_batch".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.dashboard.random_employee_max_id == 0 {
            return Err(crate::Error::Validation {
                field: "dashboard.random_employee_max_id".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.sessions.max_sessions == 0 {
            return Err(crate::Error::Validation {
                field: "sessions.max_sessions".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.sessions.sweep_interval_secs == 0 {
            return Err(crate::Error::Validation {
                field: "sessions.sweep_interval_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.remote_api.base_url.trim().is_empty() {
            return Err(crate::Error::Validation {
                field: "remote_api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
