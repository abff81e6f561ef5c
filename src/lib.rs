pub mod config;
pub mod errors;
pub mod logging;
pub mod report;

pub use graphstats_metrics as metrics;
pub use graphstats_types as types;

// Re-export commonly used items for convenience
pub use config::AppConfig;
pub use errors::{AppError, ConfigError};
pub use graphstats_metrics::{compare_stats, from_csv, get_stats, to_csv, validate, StatsCollector};
pub use graphstats_types::{Graph, StatsContext, StatsItem, StatsItemDiff};
