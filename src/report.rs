//! Graph and report file helpers

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::measure_performance;
use graphstats_metrics::{check, compare_stats, from_csv, get_stats, to_csv};
use graphstats_types::{Graph, StatsContext, StatsItem, StatsItemDiff};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Read and parse a graph document
pub fn load_graph(path: &Path) -> Result<Graph> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::IO(format!("reading graph '{}'", display(path)), e))?;
    Ok(Graph::from_json(&content)?)
}

/// Write canonical report lines, one per line
pub fn write_report(path: &Path, items: &[StatsItem], delimiter: u8) -> Result<()> {
    let mut content = to_csv(items, delimiter)?.join("\n");
    content.push('\n');
    fs::write(path, content)
        .map_err(|e| AppError::IO(format!("writing report '{}'", display(path)), e))?;
    let shown = display(path);
    tracing::debug!(path = %shown, records = items.len(), "report written");
    Ok(())
}

/// Read a report file; malformed lines are dropped
pub fn read_report(path: &Path, delimiter: u8) -> Result<Vec<StatsItem>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::IO(format!("reading report '{}'", display(path)), e))?;
    let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();
    Ok(from_csv(&lines, delimiter))
}

/// Read a report file and reject it unless it validates
pub fn verify_report(config: &AppConfig, path: &Path) -> Result<Vec<StatsItem>> {
    let items = read_report(path, config.report.delimiter)?;
    check(&config.stats, &items).map_err(|failure| AppError::InvalidReport(display(path), failure))?;
    Ok(items)
}

/// Compute the report of a graph file and write it, if it validates
///
/// Nothing is written when validation fails.
pub fn snapshot(config: &AppConfig, graph_path: &Path, out_path: &Path) -> Result<Vec<StatsItem>> {
    measure_performance!("snapshot", { "graph" => display(graph_path) }, {
        let graph = load_graph(graph_path)?;
        let items = get_stats(&config.stats, &graph);
        check(&config.stats, &items)
            .map_err(|failure| AppError::InvalidReport(display(graph_path), failure))?;
        write_report(out_path, &items, config.report.delimiter)?;
        Ok(items)
    })
}

/// Compare two report files
pub fn compare_reports(config: &AppConfig, reference_path: &Path, other_path: &Path) -> Result<StatsItemDiff> {
    measure_performance!("compare", { "reference" => display(reference_path), "other" => display(other_path) }, {
        let reference = read_report(reference_path, config.report.delimiter)?;
        let other = read_report(other_path, config.report.delimiter)?;
        Ok(compare_stats(&reference, &other))
    })
}

/// Reports of independent graphs, computed in parallel, in input order
pub fn collect_many(context: &StatsContext, graphs: &[Graph]) -> Vec<Vec<StatsItem>> {
    graphs.par_iter().map(|graph| get_stats(context, graph)).collect()
}
