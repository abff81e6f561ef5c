//! String shape statistics: lengths, word counts and charpage histograms

use crate::series::{median, quantile, MIN_SAMPLES};
use graphstats_types::vocabulary::{actions, names, texts};
use graphstats_types::StatsItem;
use std::collections::BTreeMap;

/// Codepoints per charpage
const PAGE_WIDTH: u32 = 100;

/// Charpage of a character: `ceil(codepoint / 100)`
pub fn char_page(c: char) -> u32 {
    (c as u32).div_ceil(PAGE_WIDTH)
}

/// Number of words, splitting on single ASCII spaces
///
/// An empty string is one (empty) word.
pub fn word_count(value: &str) -> usize {
    value.split(' ').count()
}

/// Histogram of charpages over every character of every string
pub fn page_histogram<'a, I>(values: I) -> BTreeMap<u32, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .flat_map(str::chars)
        .fold(BTreeMap::new(), |mut pages, c| {
            *pages.entry(char_page(c)).or_insert(0) += 1;
            pages
        })
}

/// Length, word-count and charpage statistics of a list of strings
pub fn string_series<S: AsRef<str>>(name: &str, values: &[S]) -> Vec<StatsItem> {
    if values.len() < MIN_SAMPLES {
        return Vec::new();
    }

    let mut chars: Vec<usize> = values.iter().map(|s| s.as_ref().chars().count()).collect();
    chars.sort_unstable();
    let mut words: Vec<usize> = values.iter().map(|s| word_count(s.as_ref())).collect();
    words.sort_unstable();

    let mut items = vec![
        StatsItem::new(name, actions::COUNT_MIN, texts::CHARS, chars[0] as f64),
        StatsItem::new(name, actions::COUNT_MAX, texts::CHARS, chars[chars.len() - 1] as f64),
        StatsItem::new(name, actions::COUNT_MEDIAN, texts::CHARS, median(&chars)),
        StatsItem::new(name, actions::COUNT_QUARTILE_FIRST, texts::CHARS, quantile(&chars, 0.25)),
        StatsItem::new(name, actions::COUNT_QUARTILE_THIRD, texts::CHARS, quantile(&chars, 0.75)),
        StatsItem::new(name, actions::COUNT_MIN, texts::WORDS, words[0] as f64),
        StatsItem::new(name, actions::COUNT_MAX, texts::WORDS, words[words.len() - 1] as f64),
        StatsItem::new(name, actions::COUNT_MEDIAN, texts::WORDS, median(&words)),
    ];

    let page_name = names::charpage(name);
    items.extend(
        page_histogram(values.iter().map(|s| s.as_ref()))
            .into_iter()
            .map(|(page, count)| {
                StatsItem::new(page_name.as_str(), actions::COUNT, page.to_string(), count as f64)
            }),
    );
    items
}
