use graphstats_metrics::{CodecError, ValidationFailure};
use graphstats_types::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Graph document error: {0}")]
    Graph(#[from] GraphError),
    #[error("Report encoding error: {0}")]
    Codec(#[from] CodecError),
    #[error("Report '{0}' is invalid: {1}")]
    InvalidReport(String, #[source] ValidationFailure),
    #[error("I/O error while {0}: {1}")]
    IO(String, #[source] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file '{0}': {1}")]
    FileRead(String, #[source] std::io::Error),
    #[error("Failed to parse TOML from file '{0}': {1}")]
    TomlParse(String, #[source] toml::de::Error),
    #[error("Configuration file '{0}' does not exist")]
    NotFound(String),
    #[error("Invalid report delimiter '{0}': expected one ASCII punctuation or tab character")]
    InvalidDelimiter(String),
    #[error("Invalid log level '{0}': expected error, warn, info, debug or trace")]
    InvalidLogLevel(String),
    #[error("Invalid log format '{0}': expected pretty or compact")]
    InvalidLogFormat(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
