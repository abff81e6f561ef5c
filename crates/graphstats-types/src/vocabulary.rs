//! Closed vocabulary of report dimensions and statistic kinds
//!
//! Every record emitted by the aggregation pipeline uses one of these names
//! and actions; the validator rejects anything else.

/// Dimension names
pub mod names {
    /// Metadata root list
    pub const METADATA: &str = "attributeMetadataList";
    /// Node root list
    pub const NODES: &str = "nodeList";
    /// Edge root list
    pub const EDGES: &str = "edgeList";

    /// Metadata `name` field
    pub const METADATA_NAME: &str = "attributeMetadataList name";
    /// Metadata `alternateName` field
    pub const METADATA_ALTERNATE_NAME: &str = "attributeMetadataList alternateName";
    /// Metadata `unitText` field
    pub const METADATA_UNIT_TEXT: &str = "attributeMetadataList unitText";
    /// Metadata `tagSet` field
    pub const METADATA_TAG_SET: &str = "attributeMetadataList tagSet";

    /// Tags of attributes attached to nodes
    pub const NODE_TAG_SET: &str = "nodeList tagSet";
    /// Tags of attributes attached to edges
    pub const EDGE_TAG_SET: &str = "edgeList tagSet";

    /// Attribute lists of nodes
    pub const NODE_ATTRIBUTES: &str = "nodeList attributeList";
    /// Attribute lists of edges
    pub const EDGE_ATTRIBUTES: &str = "edgeList attributeList";
    /// Attribute identifiers shared by nodes and edges
    pub const NODE_EDGE_ATTRIBUTES: &str = "nodeList+edgeList attributeList";

    /// Attribute values of nodes
    pub const NODE_VALUE: &str = "nodeList attributeList value";
    /// Attribute values of edges
    pub const EDGE_VALUE: &str = "edgeList attributeList value";
    /// Optional attribute values of nodes
    pub const NODE_OPTIONAL_VALUES: &str = "nodeList attributeList optionalValueList";
    /// Optional attribute values of edges
    pub const EDGE_OPTIONAL_VALUES: &str = "edgeList attributeList optionalValueList";

    /// Suffix appended to a string dimension for its charpage histogram
    pub const CHARPAGE_SUFFIX: &str = " charpage";

    /// Dimensions whose strings get shape statistics
    pub const STRING_DIMENSIONS: [&str; 6] = [
        METADATA_NAME,
        METADATA_ALTERNATE_NAME,
        NODE_VALUE,
        EDGE_VALUE,
        NODE_OPTIONAL_VALUES,
        EDGE_OPTIONAL_VALUES,
    ];

    /// Plain dimensions (charpage dimensions are derived from `STRING_DIMENSIONS`)
    pub const PLAIN_DIMENSIONS: [&str; 16] = [
        METADATA,
        NODES,
        EDGES,
        METADATA_NAME,
        METADATA_ALTERNATE_NAME,
        METADATA_UNIT_TEXT,
        METADATA_TAG_SET,
        NODE_TAG_SET,
        EDGE_TAG_SET,
        NODE_ATTRIBUTES,
        EDGE_ATTRIBUTES,
        NODE_EDGE_ATTRIBUTES,
        NODE_VALUE,
        EDGE_VALUE,
        NODE_OPTIONAL_VALUES,
        EDGE_OPTIONAL_VALUES,
    ];

    /// Name of the charpage histogram for a string dimension
    pub fn charpage(dimension: &str) -> String {
        format!("{dimension}{CHARPAGE_SUFFIX}")
    }

    /// Every permitted dimension name
    pub fn all() -> impl Iterator<Item = String> {
        PLAIN_DIMENSIONS
            .iter()
            .map(|n| n.to_string())
            .chain(STRING_DIMENSIONS.iter().map(|n| charpage(n)))
    }
}

/// Statistic kinds
pub mod actions {
    /// Occurrence count
    pub const COUNT: &str = "count";
    /// Minimum of a series
    pub const COUNT_MIN: &str = "count min";
    /// Maximum of a series
    pub const COUNT_MAX: &str = "count max";
    /// Median of a series
    pub const COUNT_MEDIAN: &str = "count median";
    /// 25th percentile of a series
    pub const COUNT_QUARTILE_FIRST: &str = "count quartile first";
    /// 75th percentile of a series
    pub const COUNT_QUARTILE_THIRD: &str = "count quartile third";
    /// Number of empty fields
    pub const EMPTY_COUNT: &str = "empty count";
    /// Number of distinct identifiers
    pub const UNIQUE_COUNT: &str = "unique count";
    /// Number of identifiers in an intersection
    pub const UNIQUE_INTERSECTION: &str = "unique intersection";

    /// Every permitted action
    pub const ALL: [&str; 9] = [
        COUNT,
        COUNT_MAX,
        COUNT_MEDIAN,
        COUNT_MIN,
        COUNT_QUARTILE_FIRST,
        COUNT_QUARTILE_THIRD,
        EMPTY_COUNT,
        UNIQUE_COUNT,
        UNIQUE_INTERSECTION,
    ];
}

/// Fixed sub-category labels
pub mod texts {
    /// Duplicate metadata identifiers
    pub const DUPLICATE: &str = "duplicate";
    /// Declared but never referenced
    pub const UNUSED: &str = "unused";
    /// Declared identifiers
    pub const DECLARED: &str = "declared";
    /// Referenced but never declared
    pub const UNDECLARED: &str = "undeclared";
    /// Referenced identifiers
    pub const USED: &str = "used";
    /// Character-length distribution
    pub const CHARS: &str = "chars";
    /// Word-count distribution
    pub const WORDS: &str = "words";
    /// Charpage label for a codepoint that cannot be read
    pub const UNREADABLE_PAGE: &str = "na";
}
