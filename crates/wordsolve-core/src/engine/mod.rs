//! Suggestion ranking for a partially typed word.
//!
//! Three tiers are drawn from a dictionary's tries, each with its own cap:
//! words starting with the query, words ending with it, and words merely
//! containing it. Tiers are merged in that priority, duplicates dropped, and
//! the result stable-sorted by length so shorter words come first while ties
//! keep tier order.


use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::settings::SuggestSettings;
use crate::text::{char_len, reverse_word};

/// Per-tier result caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    pub prefix: usize,
    pub suffix: usize,
    pub containing: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            prefix: 5,
            suffix: 3,
            containing: 2,
        }
    }
}

impl From<&SuggestSettings> for SuggestionLimits {
    fn from(s: &SuggestSettings) -> Self {
        Self {
            prefix: s.prefix_limit,
            suffix: s.suffix_limit,
            containing: s.containing_limit,
        }
    }
}

/// Raw per-tier hits before merging, all in reading orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionTiers {
    pub prefix: Vec<String>,
    pub suffix: Vec<String>,
    pub containing: Vec<String>,
}

impl SuggestionTiers {
    /// Merge tiers in priority order, dropping repeats, then sort by length.
    pub fn into_ranked(self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut merged =
            Vec::with_capacity(self.prefix.len() + self.suffix.len() + self.containing.len());
        for word in self
            .prefix
            .into_iter()
            .chain(self.suffix)
            .chain(self.containing)
        {
            if seen.insert(word.clone()) {
                merged.push(word);
            }
        }
        // sort_by_key is stable: equal lengths keep tier order.
        merged.sort_by_key(|w| char_len(w));
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty() && self.containing.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SuggestionEngine {
    limits: SuggestionLimits,
}

impl SuggestionEngine {
    pub fn new(limits: SuggestionLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// Ranked, distinct suggestions for `current_word`. Empty input gives an
    /// empty list.
    pub fn query(&self, current_word: &str, dict: &Dictionary) -> Vec<String> {
        let _span =
            debug_span!("suggest", query = current_word, dictionary = dict.name()).entered();
        let ranked = self.tiers(current_word, dict).into_ranked();
        debug!(hits = ranked.len());
        ranked
    }

    /// Collect each tier separately.
    pub fn tiers(&self, current_word: &str, dict: &Dictionary) -> SuggestionTiers {
        if current_word.is_empty() {
            return SuggestionTiers::default();
        }
        let tries = dict.tries();

        let prefix = tries
            .forward
            .search(current_word, false, Some(self.limits.prefix));

        // Reverse-trie hits are stored back to front.
        let suffix: Vec<String> = tries
            .reverse
            .search(current_word, true, Some(self.limits.suffix))
            .iter()
            .map(|w| reverse_word(w))
            .collect();

        let containing: Vec<String> = if self.limits.containing == 0 {
            Vec::new()
        } else {
            let existing: HashSet<&str> = prefix
                .iter()
                .chain(&suffix)
                .map(String::as_str)
                .collect();
            tries
                .forward
                .search_containing(current_word)
                .into_iter()
                .filter(|w| {
                    !existing.contains(w.as_str())
                        && !w.starts_with(current_word)
                        && !w.ends_with(current_word)
                })
                .take(self.limits.containing)
                .collect()
        };

        debug!(
            prefix = prefix.len(),
            suffix = suffix.len(),
            containing = containing.len(),
            "tiers"
        );
        SuggestionTiers {
            prefix,
            suffix,
            containing,
        }
    }
}
