//! Distribution statistics over sorted count series

use graphstats_types::vocabulary::actions;
use graphstats_types::StatsItem;

/// Series with fewer samples than this produce no statistics
pub const MIN_SAMPLES: usize = 3;

/// Exact-count buckets; anything above the last one falls into `5+`
const FREQUENCY_BUCKETS: [usize; 4] = [1, 2, 3, 4];
const FREQUENCY_OVERFLOW: usize = 5;

/// Median of an ascending, non-empty slice
pub fn median(sorted: &[usize]) -> f64 {
    let half = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[half] as f64
    } else {
        (sorted[half - 1] as f64 + sorted[half] as f64) / 2.0
    }
}

/// Linear-interpolation quantile (R-7) of an ascending, non-empty slice
pub fn quantile(sorted: &[usize], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(&next) => {
            let current = sorted[base] as f64;
            current + rest * (next as f64 - current)
        }
        None => sorted[base] as f64,
    }
}

/// min, max, median and frequency buckets of an ascending count series
pub fn count_series(name: &str, counts: &[usize]) -> Vec<StatsItem> {
    if counts.len() < MIN_SAMPLES {
        return Vec::new();
    }
    debug_assert!(counts.windows(2).all(|w| w[0] <= w[1]));

    let frequency = |predicate: &dyn Fn(usize) -> bool| {
        counts.iter().filter(|&&c| predicate(c)).count() as f64
    };

    let mut items = vec![
        StatsItem::new(name, actions::COUNT_MIN, "", counts[0] as f64),
        StatsItem::new(name, actions::COUNT_MAX, "", counts[counts.len() - 1] as f64),
        StatsItem::new(name, actions::COUNT_MEDIAN, "", median(counts)),
    ];
    items.extend(FREQUENCY_BUCKETS.iter().map(|&bucket| {
        StatsItem::new(
            name,
            actions::COUNT,
            format!("frequency {bucket}"),
            frequency(&|c| c == bucket),
        )
    }));
    items.push(StatsItem::new(
        name,
        actions::COUNT,
        format!("frequency {FREQUENCY_OVERFLOW}+"),
        frequency(&|c| c >= FREQUENCY_OVERFLOW),
    ));
    items
}
