//! Error types for graphstats documents

use thiserror::Error;

/// Failures while materialising a graph document
#[derive(Debug, Error)]
pub enum GraphError {
    /// The document is not a well-formed graph
    #[error("Graph document parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for graph document operations
pub type Result<T> = std::result::Result<T, GraphError>;
