//! Structural analysis of declared versus used attribute identifiers

use crate::series::count_series;
use crate::text::string_series;
use graphstats_types::vocabulary::{actions, names, texts};
use graphstats_types::{Attribute, Graph, StatsItem, WithAttributeList};
use std::collections::HashSet;

/// Declared and referenced attribute identifiers of a graph
#[derive(Debug, Clone)]
pub struct AttributeUsage<'g> {
    /// Metadata identifiers in declaration order, duplicates included
    pub declared: Vec<&'g str>,
    /// Attribute identifiers referenced by nodes, one per occurrence
    pub in_nodes: Vec<&'g str>,
    /// Attribute identifiers referenced by edges, one per occurrence
    pub in_edges: Vec<&'g str>,
}

impl<'g> AttributeUsage<'g> {
    /// Collect identifiers from a graph
    pub fn from_graph(graph: &'g Graph) -> Self {
        Self {
            declared: graph
                .attribute_metadata_list
                .iter()
                .map(|m| m.id.as_str())
                .collect(),
            in_nodes: graph.node_attributes().map(|a| a.id.as_str()).collect(),
            in_edges: graph.edge_attributes().map(|a| a.id.as_str()).collect(),
        }
    }

    fn declared_set(&self) -> HashSet<&'g str> {
        self.declared.iter().copied().collect()
    }

    fn node_set(&self) -> HashSet<&'g str> {
        self.in_nodes.iter().copied().collect()
    }

    fn edge_set(&self) -> HashSet<&'g str> {
        self.in_edges.iter().copied().collect()
    }

    fn used_set(&self) -> HashSet<&'g str> {
        self.in_nodes.iter().chain(&self.in_edges).copied().collect()
    }

    /// Declarations beyond the first for each identifier
    pub fn duplicate_count(&self) -> usize {
        self.declared.len() - self.declared_set().len()
    }

    /// Declared identifiers used by neither nodes nor edges
    pub fn unused_count(&self) -> usize {
        let used = self.used_set();
        self.declared_set().iter().filter(|id| !used.contains(*id)).count()
    }

    /// Used identifiers that are never declared
    pub fn undeclared_count(&self) -> usize {
        let declared = self.declared_set();
        self.used_set().iter().filter(|id| !declared.contains(*id)).count()
    }

    /// Identifiers used by both nodes and edges
    pub fn common_count(&self) -> usize {
        self.node_set().intersection(&self.edge_set()).count()
    }

    /// Usage and overlap records
    pub fn to_stats_items(&self) -> Vec<StatsItem> {
        vec![
            StatsItem::new(names::METADATA, actions::COUNT, texts::DUPLICATE, self.duplicate_count() as f64),
            StatsItem::new(names::METADATA, actions::COUNT, texts::UNUSED, self.unused_count() as f64),
            StatsItem::new(names::METADATA, actions::COUNT, texts::DECLARED, self.declared.len() as f64),
            StatsItem::new(names::METADATA, actions::COUNT, texts::UNDECLARED, self.undeclared_count() as f64),
            StatsItem::new(names::NODE_ATTRIBUTES, actions::UNIQUE_COUNT, texts::USED, self.node_set().len() as f64),
            StatsItem::new(names::EDGE_ATTRIBUTES, actions::UNIQUE_COUNT, texts::USED, self.edge_set().len() as f64),
            StatsItem::new(
                names::NODE_EDGE_ATTRIBUTES,
                actions::UNIQUE_INTERSECTION,
                texts::USED,
                self.common_count() as f64,
            ),
            StatsItem::new(names::NODE_ATTRIBUTES, actions::COUNT, texts::USED, self.in_nodes.len() as f64),
            StatsItem::new(names::EDGE_ATTRIBUTES, actions::COUNT, texts::USED, self.in_edges.len() as f64),
        ]
    }
}

/// Attribute-list lengths, ascending
fn attribute_counts<T: WithAttributeList>(list: &[T]) -> Vec<usize> {
    let mut counts: Vec<usize> = list.iter().map(|e| e.attribute_list().len()).collect();
    counts.sort_unstable();
    counts
}

fn values<'g>(attributes: impl Iterator<Item = &'g Attribute>) -> Vec<&'g str> {
    attributes.map(|a| a.value.as_str()).collect()
}

fn optional_values<'g>(attributes: impl Iterator<Item = &'g Attribute>) -> Vec<&'g str> {
    attributes
        .flat_map(|a| a.optional_value_list.iter().map(String::as_str))
        .collect()
}

/// Usage counts, attribute-count series and attribute value shapes
pub fn count_attributes(graph: &Graph) -> Vec<StatsItem> {
    let mut items = AttributeUsage::from_graph(graph).to_stats_items();

    items.extend(count_series(
        names::NODE_ATTRIBUTES,
        &attribute_counts(&graph.node_list),
    ));
    items.extend(count_series(
        names::EDGE_ATTRIBUTES,
        &attribute_counts(&graph.edge_list),
    ));
    items.extend(string_series(names::NODE_VALUE, &values(graph.node_attributes())));
    items.extend(string_series(names::EDGE_VALUE, &values(graph.edge_attributes())));
    items.extend(string_series(
        names::NODE_OPTIONAL_VALUES,
        &optional_values(graph.node_attributes()),
    ));
    items.extend(string_series(
        names::EDGE_OPTIONAL_VALUES,
        &optional_values(graph.edge_attributes()),
    ));
    items
}

/// Shapes of metadata `name` and `alternateName`
pub fn count_attribute_metadata(graph: &Graph) -> Vec<StatsItem> {
    let metadata = &graph.attribute_metadata_list;
    let names_list: Vec<&str> = metadata.iter().map(|m| m.name.as_str()).collect();
    let alternate_names: Vec<&str> = metadata.iter().map(|m| m.alternate_name.as_str()).collect();

    let mut items = string_series(names::METADATA_NAME, &names_list);
    items.extend(string_series(names::METADATA_ALTERNATE_NAME, &alternate_names));
    items
}
