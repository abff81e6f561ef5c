//! Report integrity checks
//!
//! Checks run in order and stop at the first failing class: report size,
//! closed vocabulary, then duplicate identity keys.

use graphstats_types::vocabulary::{actions, names, texts};
use graphstats_types::{StatsContext, StatsItem};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Fewer records than this means a truncated report
pub const MIN_ITEMS: usize = 30;
/// More records than this means a runaway report
pub const MAX_ITEMS: usize = 1000;

lazy_static! {
    static ref VALID_NAMES: HashSet<String> = names::all().collect();
    static ref VALID_ACTIONS: HashSet<&'static str> = actions::ALL.into_iter().collect();
    static ref VALID_CUSTOM_TEXT: Regex = Regex::new(r"^[A-Za-z0-9 +]{2,30}$").unwrap();
    static ref PAGE_LABEL: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Why a report failed validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// Report is suspiciously small
    #[error("Too few stats items recorded: {0}")]
    TooFew(usize),
    /// Report is suspiciously large
    #[error("Too many stats items recorded: {0}")]
    TooMany(usize),
    /// Records outside the closed vocabulary
    #[error("Found {} invalid items --> {}", .0.len(), .0.join(";"))]
    InvalidItems(Vec<String>),
    /// Records sharing an identity key
    #[error("Found {excess} unexpected duplicates --> {}", .keys.join(";"))]
    Duplicates {
        /// Records beyond the first for each key
        excess: usize,
        /// Keys of the excess records, sorted
        keys: Vec<String>,
    },
}

fn is_valid_text(ctx: &StatsContext, item: &StatsItem) -> bool {
    let text = item.text.as_str();
    text.is_empty()
        || ctx.is_supported_text(text)
        || (item.name.ends_with(names::CHARPAGE_SUFFIX)
            && (PAGE_LABEL.is_match(text) || text == texts::UNREADABLE_PAGE))
        || VALID_CUSTOM_TEXT.is_match(text)
}

/// True when a record belongs to the closed vocabulary
pub fn is_valid_item(ctx: &StatsContext, item: &StatsItem) -> bool {
    VALID_NAMES.contains(&item.name)
        && VALID_ACTIONS.contains(item.action.as_str())
        && item.value.is_finite()
        && is_valid_text(ctx, item)
}

/// Check a report, reporting the first failing class
pub fn check(ctx: &StatsContext, items: &[StatsItem]) -> Result<(), ValidationFailure> {
    if items.len() < MIN_ITEMS {
        return Err(ValidationFailure::TooFew(items.len()));
    }
    if items.len() > MAX_ITEMS {
        return Err(ValidationFailure::TooMany(items.len()));
    }

    let invalid: Vec<String> = items
        .iter()
        .filter(|item| !is_valid_item(ctx, item))
        .map(|item| item.key().to_string())
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationFailure::InvalidItems(invalid));
    }

    let mut keys: Vec<_> = items.iter().map(StatsItem::key).collect();
    keys.sort_unstable();
    let duplicates: Vec<String> = keys
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[1].to_string())
        .collect();
    if !duplicates.is_empty() {
        return Err(ValidationFailure::Duplicates {
            excess: duplicates.len(),
            keys: duplicates,
        });
    }

    Ok(())
}

/// Diagnostic text for a report; empty means valid
pub fn validate(ctx: &StatsContext, items: &[StatsItem]) -> String {
    match check(ctx, items) {
        Ok(()) => String::new(),
        Err(failure) => {
            log::debug!("report validation failed: {failure}");
            failure.to_string()
        }
    }
}
