//! Report comparison keyed by record identity

use graphstats_types::{StatsItem, StatsItemDiff, StatsKey};
use std::collections::HashMap;

/// Values of a report by identity key; later records win on duplicate keys
fn index(items: &[StatsItem]) -> HashMap<StatsKey<'_>, f64> {
    items.iter().map(|item| (item.key(), item.value)).collect()
}

/// Value equality where NaN matches NaN
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Compare a report against a reference
///
/// `added`, `modified` and `identical` follow the order of `other`;
/// `removed` follows the order of `reference`. Modified records carry the
/// value from `other`.
pub fn compare_stats(reference: &[StatsItem], other: &[StatsItem]) -> StatsItemDiff {
    let reference_values = index(reference);
    let other_values = index(other);
    let mut diff = StatsItemDiff::default();

    for item in other {
        match reference_values.get(&item.key()) {
            None => diff.added.push(item.clone()),
            Some(&value) if same_value(value, item.value) => diff.identical.push(item.clone()),
            Some(_) => diff.modified.push(item.clone()),
        }
    }

    diff.removed = reference
        .iter()
        .filter(|item| !other_values.contains_key(&item.key()))
        .cloned()
        .collect();

    diff.changes = diff.added.len() + diff.removed.len() + diff.modified.len();
    log::debug!("report comparison: {diff}");
    diff
}
