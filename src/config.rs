use crate::constants::DEFAULT_DATA_URL;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved configuration with all values filled in (no Options).
///
/// This struct represents the pipeline defaults and can be deserialized by the TOML
/// loader. All fields have concrete values, making it safe to access directly without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Bulletin document location: URL or local JSON file
    pub data_source: String,
    /// Directory for raw document snapshots
    pub raw_dir: PathBuf,
    /// Directory for the derived JSON reports
    pub derived_dir: PathBuf,
    /// Whether to pretty-print the derived JSON reports
    pub pretty_json: bool,
    /// Whether to keep a raw snapshot of the fetched document
    pub keep_raw_snapshot: bool,
    /// Maximum number of retry attempts for failed fetches
    pub max_retries: u32,
    /// Initial delay in milliseconds before the first retry
    pub retry_initial_delay_ms: u64,
    /// Maximum delay in milliseconds between retries
    pub retry_max_delay_ms: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_URL.to_string(),
            raw_dir: PathBuf::from("data/raw"),
            derived_dir: PathBuf::from("data/derived"),
            pretty_json: false,
            keep_raw_snapshot: false,
            max_retries: 3,
            retry_initial_delay_ms: 1000,
            retry_max_delay_ms: 10000,
            request_timeout_secs: 30,
        }
    }
}

/// Configuration that can be loaded from a TOML file.
///
/// Deserializes the optional date bounds and the flattened pipeline
/// configuration. The parser rejects unknown keys to catch typos, and
/// validates the timeout and the retry delay ordering.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedConfigFile {
    /// First publication date to include (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`)
    #[serde(default)]
    pub start: Option<String>,
    /// Last publication date to include
    #[serde(default)]
    pub end: Option<String>,
    /// Flattened resolved configuration with pipeline defaults
    #[serde(flatten)]
    pub resolved: ResolvedConfig,
}

impl ResolvedConfigFile {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Every key is optional; absent keys take the pipeline defaults.
    /// Rejects unknown keys, a zero request timeout, and a maximum retry
    /// delay below the initial delay.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or a value fails validation. Returns `IoError` if the file
    /// cannot be read.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.resolved.request_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "Request timeout must be greater than 0".into(),
            ));
        }
        if config.resolved.retry_max_delay_ms < config.resolved.retry_initial_delay_ms {
            return Err(AppError::InvalidInput(
                "Maximum retry delay must not be below the initial delay".into(),
            ));
        }

        Ok(config)
    }
}
