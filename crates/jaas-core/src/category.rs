//! # Category Whitelist & Tally
//!
//! The fixed set of recognized joke categories and the per-run tally of
//! observed category counts.
//!
//! The whitelist is process-wide immutable configuration, represented as a
//! compile-time constant. The tally preserves first-occurrence insertion
//! order so unknown categories are reported in dataset order, not sorted.

use std::collections::HashMap;

/// The recognized joke categories, in report order.
pub const CATEGORY_WHITELIST: [&str; 7] = [
    "programming",
    "security",
    "general",
    "dad",
    "pun",
    "dark",
    "workplace",
];

/// Recommended minimum number of jokes per whitelist category.
///
/// Coverage below this threshold is advisory: it produces a warning in the
/// report but never contributes to the error count.
pub const COVERAGE_MINIMUM: usize = 15;

/// Returns true if `name` is one of the recognized categories.
pub fn is_whitelisted(name: &str) -> bool {
    CATEGORY_WHITELIST.contains(&name)
}

/// Count of records per observed category value.
///
/// Keyed by the raw `category` string from the dataset, whitelisted or not.
/// Iteration yields categories in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct CategoryTally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl CategoryTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `category`.
    pub fn observe(&mut self, category: &str) {
        match self.counts.get_mut(category) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(category.to_string(), 1);
                self.order.push(category.to_string());
            }
        }
    }

    /// Observed count for `category`, 0 if never seen.
    pub fn count(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Number of distinct observed categories, whitelisted or not.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no category has been observed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate observed categories with their counts, in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|category| (category.as_str(), self.counts[category]))
    }

    /// Observed categories that are not on the whitelist, in first-occurrence order.
    pub fn unknown_categories(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(String::as_str)
            .filter(|category| !is_whitelisted(category))
            .collect()
    }
}
