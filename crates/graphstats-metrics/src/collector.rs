//! Statistics collection: composes every analysis into one report

use crate::analyzer::{count_attribute_metadata, count_attributes};
use crate::counters::{count_by_tags, count_by_unit_text, count_empty_metadata, count_root_graph};
use graphstats_types::{Graph, StatsContext, StatsItem};

/// Collector bound to one configuration context
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    context: StatsContext,
}

impl StatsCollector {
    /// Create a collector for a context
    pub fn new(context: StatsContext) -> Self {
        Self { context }
    }

    /// Context used for tag and unit counting
    pub fn context(&self) -> &StatsContext {
        &self.context
    }

    /// Collect the report of a graph
    pub fn collect(&self, graph: &Graph) -> Vec<StatsItem> {
        get_stats(&self.context, graph)
    }
}

/// Every statistics record of a graph, in pipeline order
///
/// Root counts, tag counts, unit counts, emptiness counts, attribute usage
/// and shapes, then metadata string shapes. Identical inputs always produce
/// identical output.
pub fn get_stats(ctx: &StatsContext, graph: &Graph) -> Vec<StatsItem> {
    let stages: [(&str, Vec<StatsItem>); 6] = [
        ("root", count_root_graph(graph)),
        ("tags", count_by_tags(ctx, graph)),
        ("units", count_by_unit_text(ctx, graph)),
        ("empty", count_empty_metadata(graph)),
        ("attributes", count_attributes(graph)),
        ("metadata", count_attribute_metadata(graph)),
    ];

    let mut items = Vec::new();
    for (stage, records) in stages {
        log::debug!("stats stage {stage}: {} records", records.len());
        items.extend(records);
    }
    items
}
