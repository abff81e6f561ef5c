pub mod loader;

use crate::errors::ConfigError;
use crate::logging::{LogFormat, LoggingConfig};
use graphstats_metrics::DEFAULT_DELIMITER;
use graphstats_types::StatsContext;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::Level;

pub use loader::ConfigLoader;

pub const CONFIG_DIR_NAME: &str = "graphstats";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Overrides the configuration file location
pub const ENV_CONFIG_PATH: &str = "GRAPHSTATS_CONFIG";
/// Overrides `[logging] level`
pub const ENV_LOG_LEVEL: &str = "GRAPHSTATS_LOG_LEVEL";

/// Main Application Configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub stats: StatsContext,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Partial Application Configuration for loading from files
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    stats: Option<StatsContext>,
    report: Option<PartialReportConfig>,
    logging: Option<PartialLoggingConfig>,
}

/// Report file settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Field delimiter of report lines
    pub delimiter: u8,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialReportConfig {
    pub delimiter: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialLoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ReportConfig {
    /// Create ReportConfig from partial config with defaults
    pub fn from_partial(partial: Option<PartialReportConfig>) -> Result<Self, ConfigError> {
        let partial = partial.unwrap_or_default();
        let delimiter = match partial.delimiter {
            Some(text) => parse_delimiter(&text)?,
            None => DEFAULT_DELIMITER,
        };
        Ok(Self { delimiter })
    }
}

/// A delimiter is one ASCII punctuation character or a tab
fn parse_delimiter(text: &str) -> Result<u8, ConfigError> {
    match text.as_bytes() {
        [byte] if byte.is_ascii_punctuation() || *byte == b'\t' => Ok(*byte),
        _ => Err(ConfigError::InvalidDelimiter(text.to_string())),
    }
}

fn parse_level(text: &str) -> Result<Level, ConfigError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::InvalidLogLevel(text.to_string())),
    }
}

fn parse_format(text: &str) -> Result<LogFormat, ConfigError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "compact" => Ok(LogFormat::Compact),
        _ => Err(ConfigError::InvalidLogFormat(text.to_string())),
    }
}

impl LoggingConfig {
    /// Create LoggingConfig from partial config, letting the environment win
    pub fn from_partial_and_env(
        partial: Option<PartialLoggingConfig>,
        env_map: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let partial = partial.unwrap_or_default();
        let defaults = LoggingConfig::default();

        let level = match env_map.get(ENV_LOG_LEVEL).or(partial.level.as_ref()) {
            Some(text) => parse_level(text)?,
            None => defaults.level,
        };
        let format = match partial.format {
            Some(text) => parse_format(&text)?,
            None => defaults.format,
        };

        Ok(Self {
            level,
            format,
            ..defaults
        })
    }
}

impl AppConfig {
    /// Load configuration from the default location and environment
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load_config()
    }

    /// Create AppConfig from partial config and environment
    pub fn from_partial_and_env(
        partial: Option<PartialAppConfig>,
        env_map: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let partial = partial.unwrap_or_default();

        Ok(AppConfig {
            stats: partial.stats.unwrap_or_default(),
            report: ReportConfig::from_partial(partial.report)?,
            logging: LoggingConfig::from_partial_and_env(partial.logging, &env_map)?,
        })
    }

    /// Parse a TOML document; `source` only labels errors
    pub fn from_toml(source: &str, content: &str) -> Result<Self, ConfigError> {
        let partial: PartialAppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::TomlParse(source.to_string(), e))?;
        Self::from_partial_and_env(Some(partial), HashMap::new())
    }
}
