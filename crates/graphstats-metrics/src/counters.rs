//! Root, tag, unit and emptiness counters

use graphstats_types::vocabulary::{actions, names};
use graphstats_types::{Graph, StatsContext, StatsItem, Taggable};
use std::collections::{BTreeMap, BTreeSet};

/// Counter with one zero-initialised slot per category
type Counter<'a> = BTreeMap<&'a str, usize>;

fn init_counter<'a, I>(categories: I) -> Counter<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    categories.into_iter().map(|c| (c, 0)).collect()
}

/// Records for every non-zero slot of a counter
fn to_stats_items(name: &str, action: &str, counter: Counter<'_>) -> Vec<StatsItem> {
    counter
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(text, count)| StatsItem::new(name, action, text, count as f64))
        .collect()
}

/// Number of metadata entries, nodes and edges
pub fn count_root_graph(graph: &Graph) -> Vec<StatsItem> {
    vec![
        StatsItem::new(
            names::METADATA,
            actions::COUNT,
            "",
            graph.attribute_metadata_list.len() as f64,
        ),
        StatsItem::new(names::NODES, actions::COUNT, "", graph.node_list.len() as f64),
        StatsItem::new(names::EDGES, actions::COUNT, "", graph.edge_list.len() as f64),
    ]
}

/// Occurrences of each supported tag across a list of taggable entities
pub fn count_tags_in_list<'t, T, I>(
    name: &str,
    supported_tags: &BTreeSet<String>,
    list: I,
) -> Vec<StatsItem>
where
    T: Taggable + 't,
    I: IntoIterator<Item = &'t T>,
{
    let counter = list.into_iter().fold(
        init_counter(supported_tags.iter().map(String::as_str)),
        |mut counter, entity| {
            for tag in entity.tag_set().intersection(supported_tags) {
                if let Some(slot) = counter.get_mut(tag.as_str()) {
                    *slot += 1;
                }
            }
            counter
        },
    );
    to_stats_items(name, actions::COUNT, counter)
}

/// Tag counts for metadata, node attributes and edge attributes
pub fn count_by_tags(ctx: &StatsContext, graph: &Graph) -> Vec<StatsItem> {
    let supported = &ctx.supported_tags;
    let mut items = count_tags_in_list(
        names::METADATA_TAG_SET,
        supported,
        &graph.attribute_metadata_list,
    );
    items.extend(count_tags_in_list(
        names::NODE_TAG_SET,
        supported,
        graph.node_attributes(),
    ));
    items.extend(count_tags_in_list(
        names::EDGE_TAG_SET,
        supported,
        graph.edge_attributes(),
    ));
    items
}

/// Occurrences of each supported unit among trimmed `unitText` values
pub fn count_by_unit_text(ctx: &StatsContext, graph: &Graph) -> Vec<StatsItem> {
    let counter = graph
        .attribute_metadata_list
        .iter()
        .map(|m| m.unit_text.trim())
        .filter(|unit| ctx.supported_units.contains(*unit))
        .fold(Counter::new(), |mut counter, unit| {
            *counter.entry(unit).or_insert(0) += 1;
            counter
        });
    to_stats_items(names::METADATA_UNIT_TEXT, actions::COUNT, counter)
}

/// Metadata with empty `name`, `alternateName`, `unitText` and `tagSet`
///
/// Only zero-length values are empty; whitespace is content.
pub fn count_empty_metadata(graph: &Graph) -> Vec<StatsItem> {
    let metadata = &graph.attribute_metadata_list;
    let empty = |predicate: fn(&graphstats_types::AttributeMetadata) -> bool| {
        metadata.iter().filter(|m| predicate(m)).count() as f64
    };

    vec![
        StatsItem::new(names::METADATA_NAME, actions::EMPTY_COUNT, "", empty(|m| m.name.is_empty())),
        StatsItem::new(
            names::METADATA_ALTERNATE_NAME,
            actions::EMPTY_COUNT,
            "",
            empty(|m| m.alternate_name.is_empty()),
        ),
        StatsItem::new(
            names::METADATA_UNIT_TEXT,
            actions::EMPTY_COUNT,
            "",
            empty(|m| m.unit_text.is_empty()),
        ),
        StatsItem::new(
            names::METADATA_TAG_SET,
            actions::EMPTY_COUNT,
            "",
            empty(|m| m.tag_set.is_empty()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphstats_types::{Attribute, AttributeMetadata, Node};

    fn metadata(name: &str, alternate_name: &str, unit_text: &str, tags: &[&str]) -> AttributeMetadata {
        AttributeMetadata {
            id: name.to_lowercase(),
            name: name.to_string(),
            alternate_name: alternate_name.to_string(),
            unit_text: unit_text.to_string(),
            tag_set: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_graph() -> Graph {
        Graph {
            attribute_metadata_list: vec![
                metadata("Length", "Total length", "km", &["alpha"]),
                metadata("Price", "", " GBP ", &["beta", "gamma"]),
                metadata("", " ", "", &[]),
                metadata("Distance", "Road", "km", &["alpha", "delta"]),
            ],
            node_list: vec![Node {
                id: "n1".to_string(),
                attribute_list: vec![Attribute {
                    id: "length".to_string(),
                    value: "12".to_string(),
                    optional_value_list: vec![],
                    tag_set: ["alpha".to_string(), "zeta".to_string()].into(),
                }],
            }],
            edge_list: vec![],
        }
    }

    fn texts_and_values(items: &[StatsItem]) -> Vec<(&str, f64)> {
        items.iter().map(|i| (i.text.as_str(), i.value)).collect()
    }

    #[test]
    fn test_count_root_graph() {
        let items = count_root_graph(&sample_graph());
        let values: Vec<(&str, f64)> = items.iter().map(|i| (i.name.as_str(), i.value)).collect();
        assert_eq!(
            values,
            vec![("attributeMetadataList", 4.0), ("nodeList", 1.0), ("edgeList", 0.0)]
        );
    }

    #[test]
    fn test_count_by_tags_ignores_unsupported_and_zero() {
        let ctx = StatsContext::new(["alpha", "beta", "delta"], ["km"]);
        let items = count_by_tags(&ctx, &sample_graph());

        let metadata: Vec<&StatsItem> =
            items.iter().filter(|i| i.name == "attributeMetadataList tagSet").collect();
        assert_eq!(metadata.len(), 3);
        assert_eq!(
            texts_and_values(&count_tags_in_list(
                "attributeMetadataList tagSet",
                &ctx.supported_tags,
                &sample_graph().attribute_metadata_list,
            )),
            vec![("alpha", 2.0), ("beta", 1.0), ("delta", 1.0)]
        );

        let nodes: Vec<&StatsItem> = items.iter().filter(|i| i.name == "nodeList tagSet").collect();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text, "alpha");
        assert!(!items.iter().any(|i| i.name == "edgeList tagSet"));
    }

    #[test]
    fn test_count_by_unit_text_trims() {
        let ctx = StatsContext::new(Vec::<String>::new(), ["km", "GBP"]);
        let items = count_by_unit_text(&ctx, &sample_graph());
        assert_eq!(texts_and_values(&items), vec![("GBP", 1.0), ("km", 2.0)]);
        assert!(items.iter().all(|i| i.name == "attributeMetadataList unitText"));
    }

    #[test]
    fn test_count_empty_metadata_is_literal() {
        let items = count_empty_metadata(&sample_graph());
        let values: Vec<(&str, f64)> = items.iter().map(|i| (i.name.as_str(), i.value)).collect();
        assert_eq!(
            values,
            vec![
                ("attributeMetadataList name", 1.0),
                // " " is not empty
                ("attributeMetadataList alternateName", 1.0),
                ("attributeMetadataList unitText", 1.0),
                ("attributeMetadataList tagSet", 1.0),
            ]
        );
        assert!(items.iter().all(|i| i.action == "empty count" && i.text.is_empty()));
    }
}
