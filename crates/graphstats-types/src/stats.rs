//! Statistics records, their identity key, configuration context and diffs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator used when rendering an identity key for humans
pub const KEY_SEPARATOR: &str = "---";

/// Configuration for one aggregation run
///
/// Only set membership matters for both options; unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct StatsContext {
    /// Tags counted when present in a tag set
    #[serde(alias = "supportedTags")]
    pub supported_tags: BTreeSet<String>,
    /// Units counted when equal to a trimmed `unitText`
    #[serde(alias = "supportedUnits")]
    pub supported_units: BTreeSet<String>,
}

impl StatsContext {
    /// Build a context from any string collections
    pub fn new<T, U>(tags: T, units: U) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            supported_tags: tags.into_iter().map(Into::into).collect(),
            supported_units: units.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `text` is one of the configured tags or units
    pub fn is_supported_text(&self, text: &str) -> bool {
        self.supported_tags.contains(text) || self.supported_units.contains(text)
    }
}

/// One aggregated fact of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsItem {
    /// Logical dimension, e.g. `nodeList attributeList`
    pub name: String,
    /// Statistic kind, e.g. `count min`
    pub action: String,
    /// Sub-category, possibly empty
    pub text: String,
    /// Integer or real value
    pub value: f64,
}

impl StatsItem {
    /// Create a record
    pub fn new(
        name: impl Into<String>,
        action: impl Into<String>,
        text: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
            text: text.into(),
            value,
        }
    }

    /// Identity key of the record
    pub fn key(&self) -> StatsKey<'_> {
        StatsKey {
            name: &self.name,
            action: &self.action,
            text: &self.text,
        }
    }
}

/// Composite identity of a record: (name, action, text)
///
/// Compared structurally, so field contents never collide across fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatsKey<'a> {
    /// Dimension name
    pub name: &'a str,
    /// Statistic kind
    pub action: &'a str,
    /// Sub-category
    pub text: &'a str,
}

impl fmt::Display for StatsKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.name,
            self.action,
            self.text,
            sep = KEY_SEPARATOR
        )
    }
}

/// Structural difference between two reports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsItemDiff {
    /// Present only in the other report
    pub added: Vec<StatsItem>,
    /// Present only in the reference report
    pub removed: Vec<StatsItem>,
    /// Present in both with different values; carries the other value
    pub modified: Vec<StatsItem>,
    /// Present in both with equal values
    pub identical: Vec<StatsItem>,
    /// `added + removed + modified`
    pub changes: usize,
}

impl StatsItemDiff {
    /// True when both reports are statistically equivalent
    pub fn is_equivalent(&self) -> bool {
        self.changes == 0
    }
}

impl fmt::Display for StatsItemDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} changes ({} added, {} removed, {} modified, {} identical)",
            self.changes,
            self.added.len(),
            self.removed.len(),
            self.modified.len(),
            self.identical.len()
        )
    }
}
