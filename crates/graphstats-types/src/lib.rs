//! graphstats shared types
//!
//! Graph entities, statistics records and the closed report vocabulary.

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod stats;
pub mod vocabulary;

// Re-export commonly used types
pub use error::*;
pub use graph::*;
pub use stats::*;
