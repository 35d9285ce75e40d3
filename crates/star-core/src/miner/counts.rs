//! Verb-root extraction and ranking.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// A run of two or more Hangul syllables followed by one of the verb
    /// endings 하다, 했다, 하여, 하고, 할, 한. The first group is the root.
    pub static ref VERB_ROOT_PATTERN: Regex =
        Regex::new(r"([가-힣]{2,})(하다|했다|하여|하고|할|한)").unwrap();
}

/// Number of ranked roots kept before merging with the seed list.
pub const DEFAULT_TOP_VERBS: usize = 50;

/// Verb-root frequencies that remember first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl VerbCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `root`.
    pub fn record(&mut self, root: &str) {
        self.add(root, 1);
    }

    fn add(&mut self, root: &str, count: usize) {
        match self.index.get(root) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(root.to_string(), self.entries.len());
                self.entries.push((root.to_string(), count));
            }
        }
    }

    /// Fold another set of counts into this one.
    ///
    /// Counts are summed; roots new to `self` are appended in `other`'s
    /// discovery order, so merging documents in a fixed order is deterministic.
    pub fn merge(&mut self, other: &VerbCounts) {
        for (root, count) in &other.entries {
            self.add(root, *count);
        }
    }

    /// Occurrences of `root` (zero if never seen).
    pub fn count(&self, root: &str) -> usize {
        self.index.get(root).map_or(0, |&i| self.entries[i].1)
    }

    /// Number of distinct roots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Roots with their counts, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(root, count)| (root.as_str(), *count))
    }

    /// The `n` most frequent roots, ties broken by discovery order.
    pub fn ranked(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // Stable sort keeps discovery order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(root, _)| root.as_str())
            .collect()
    }
}

/// Count every verb root in `text`.
pub fn extract_verb_roots(text: &str) -> VerbCounts {
    let mut counts = VerbCounts::new();
    for captures in VERB_ROOT_PATTERN.captures_iter(text) {
        if let Some(root) = captures.get(1) {
            counts.record(root.as_str());
        }
    }
    counts
}

/// Rank the top [`DEFAULT_TOP_VERBS`] roots and merge them behind the seed list.
pub fn rank_and_merge(counts: &VerbCounts, seed_verbs: &[String]) -> Vec<String> {
    merge_with_seed(seed_verbs, counts.ranked(DEFAULT_TOP_VERBS))
}

/// Seed verbs first in seed order, then ranked roots not already present.
pub(crate) fn merge_with_seed(seed_verbs: &[String], ranked: Vec<&str>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(seed_verbs.len() + ranked.len());
    let mut seen = std::collections::HashSet::new();

    for verb in seed_verbs.iter().map(String::as_str).chain(ranked) {
        if seen.insert(verb) {
            merged.push(verb.to_string());
        }
    }

    merged
}
