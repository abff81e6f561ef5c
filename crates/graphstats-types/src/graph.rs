//! Graph document entities
//!
//! The graph is produced by an external collaborator and handed to the
//! statistics engine as an immutable value. Field names follow the JSON
//! document (`attributeMetadataList`, `unitText`, `tagSet`, ...).

use crate::error::GraphError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

// ============ Traits ============

/// Any entity exposing a set of free-form category strings
pub trait Taggable {
    /// Tags attached to the entity
    fn tag_set(&self) -> &BTreeSet<String>;
}

/// Entities carrying attribute values (nodes and edges)
pub trait WithAttributeList {
    /// Attributes in document order
    fn attribute_list(&self) -> &[Attribute];
}

// ============ Entities ============

/// Declaration of an attribute: identifier, naming and unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttributeMetadata {
    /// Identifier referenced by attributes; duplicates are measured, not rejected
    pub id: String,
    /// Display name
    pub name: String,
    /// Alternate display name
    pub alternate_name: String,
    /// Unit of measure, compared after trimming
    pub unit_text: String,
    /// Free-form tags
    pub tag_set: BTreeSet<String>,
}

/// A value attached to a node or edge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attribute {
    /// Identifier of the declaring metadata (not enforced)
    pub id: String,
    /// Scalar value in its textual form
    #[serde(deserialize_with = "scalar_as_string")]
    pub value: String,
    /// Alternative values
    pub optional_value_list: Vec<String>,
    /// Free-form tags
    pub tag_set: BTreeSet<String>,
}

/// Graph node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
    /// Node identifier
    pub id: String,
    /// Attribute values
    pub attribute_list: Vec<Attribute>,
}

/// Graph edge; endpoints are not checked against node identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Edge {
    /// Source node identifier
    pub from_node: String,
    /// Target node identifier
    pub to_node: String,
    /// Attribute values
    pub attribute_list: Vec<Attribute>,
}

/// Tagged attribute graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Graph {
    /// Declared attributes
    pub attribute_metadata_list: Vec<AttributeMetadata>,
    /// Nodes in document order
    pub node_list: Vec<Node>,
    /// Edges in document order
    pub edge_list: Vec<Edge>,
}

impl Graph {
    /// Parse a graph from its JSON document
    pub fn from_json(content: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Attributes of every node, flattened in document order
    pub fn node_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.node_list.iter().flat_map(|n| n.attribute_list())
    }

    /// Attributes of every edge, flattened in document order
    pub fn edge_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.edge_list.iter().flat_map(|e| e.attribute_list())
    }
}

impl Taggable for AttributeMetadata {
    fn tag_set(&self) -> &BTreeSet<String> {
        &self.tag_set
    }
}

impl Taggable for Attribute {
    fn tag_set(&self) -> &BTreeSet<String> {
        &self.tag_set
    }
}

impl WithAttributeList for Node {
    fn attribute_list(&self) -> &[Attribute] {
        &self.attribute_list
    }
}

impl WithAttributeList for Edge {
    fn attribute_list(&self) -> &[Attribute] {
        &self.attribute_list
    }
}

/// Accepts strings, numbers and booleans for a scalar attribute value
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "attribute value must be a scalar, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_from_json() {
        let content = r#"{
            "attributeMetadataList": [
                {"id": "length", "name": "Length", "alternateName": "", "unitText": "km", "tagSet": ["alpha", "alpha"]}
            ],
            "nodeList": [
                {"id": "n1", "attributeList": [{"id": "length", "value": 12, "optionalValueList": ["twelve"], "tagSet": []}]}
            ],
            "edgeList": [
                {"fromNode": "n1", "toNode": "n2", "attributeList": [{"id": "length", "value": "3", "tagSet": ["beta"]}]}
            ]
        }"#;

        let graph = Graph::from_json(content).unwrap();
        assert_eq!(graph.attribute_metadata_list.len(), 1);
        assert_eq!(graph.attribute_metadata_list[0].unit_text, "km");
        assert_eq!(graph.attribute_metadata_list[0].tag_set.len(), 1);
        assert_eq!(graph.node_list[0].attribute_list[0].value, "12");
        assert!(graph.edge_list[0].attribute_list[0].optional_value_list.is_empty());
        assert_eq!(graph.edge_list[0].to_node, "n2");
    }

    #[test]
    fn test_graph_from_json_rejects_malformed_document() {
        let result = Graph::from_json("{\"nodeList\": 3}");
        assert!(matches!(result, Err(GraphError::Parse(_))));
    }

    #[test]
    fn test_flattened_attributes() {
        let attribute = |id: &str| Attribute {
            id: id.to_string(),
            ..Attribute::default()
        };
        let graph = Graph {
            attribute_metadata_list: vec![],
            node_list: vec![
                Node {
                    id: "n1".to_string(),
                    attribute_list: vec![attribute("a"), attribute("b")],
                },
                Node {
                    id: "n2".to_string(),
                    attribute_list: vec![attribute("c")],
                },
            ],
            edge_list: vec![Edge {
                from_node: "n1".to_string(),
                to_node: "n2".to_string(),
                attribute_list: vec![attribute("d")],
            }],
        };

        let node_ids: Vec<&str> = graph.node_attributes().map(|a| a.id.as_str()).collect();
        assert_eq!(node_ids, vec!["a", "b", "c"]);
        assert_eq!(graph.edge_attributes().count(), 1);
    }
}
