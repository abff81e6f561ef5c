//! Graph statistics metrics
//!
//! This crate turns a property graph document into a flat report of
//! statistics records, encodes reports as delimited text, validates them and
//! compares two reports.

#![warn(missing_docs)]

pub mod analyzer;
pub mod codec;
pub mod collector;
pub mod counters;
pub mod diff;
pub mod series;
pub mod text;
pub mod validator;

/// Re-export commonly used items
pub use codec::{from_csv, to_csv, CodecError, DEFAULT_DELIMITER};
pub use collector::{get_stats, StatsCollector};
pub use diff::compare_stats;
pub use validator::{check, validate, ValidationFailure};
