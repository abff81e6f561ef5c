// Shared fixtures for the integration tests

#![allow(dead_code)]

use graphstats::config::{AppConfig, ConfigLoader};
use graphstats::{Graph, StatsContext, StatsItem};
use std::fs;
use std::path::PathBuf;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn alpha_config() -> AppConfig {
    ConfigLoader::with_path(fixture("stats-alpha.toml"))
        .load_config()
        .unwrap()
}

pub fn alpha_context() -> StatsContext {
    StatsContext::new(["alpha", "beta", "delta"], ["km", "GBP"])
}

pub fn alpha_graph() -> Graph {
    graphstats::report::load_graph(&fixture("graph-alpha.json")).unwrap()
}

/// Golden report lines, in canonical order
pub fn golden_lines() -> Vec<String> {
    fs::read_to_string(fixture("graph-alpha-stats.csv"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn golden_items() -> Vec<StatsItem> {
    graphstats::from_csv(&golden_lines(), b',')
}

/// Records ordered by identity key, for order-insensitive comparison
pub fn sorted(mut items: Vec<StatsItem>) -> Vec<StatsItem> {
    items.sort_by(|a, b| a.key().cmp(&b.key()).then(a.value.total_cmp(&b.value)));
    items
}
