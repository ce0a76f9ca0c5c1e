//! Memoized suggestion lists keyed by (dictionary name, query).
//!
//! Entries are evicted least-recently-used once `capacity` is exceeded, where
//! "used" means looked up through `get_or_compute`. Invalidation is per
//! dictionary namespace: any change to a dictionary drops all of its entries.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::dict::Dictionary;
use crate::engine::SuggestionEngine;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    dictionary: String,
    query: String,
}

struct CacheEntry {
    suggestions: Vec<String>,
    last_access: u64,
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub len: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

pub struct SuggestionCache {
    entries: HashMap<CacheKey, CacheEntry>,
    /// access tick → key, oldest first.
    recency: BTreeMap<u64, CacheKey>,
    clock: u64,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl SuggestionCache {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            clock: 0,
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached suggestions for `query` against `dict`, computing them with
    /// `engine` on a miss.
    pub fn get_or_compute(
        &mut self,
        engine: &SuggestionEngine,
        dict: &Dictionary,
        query: &str,
    ) -> Vec<String> {
        self.get_or_insert_with(dict.name(), query, || engine.query(query, dict))
    }

    pub fn get_or_insert_with(
        &mut self,
        dictionary_id: &str,
        query: &str,
        compute: impl FnOnce() -> Vec<String>,
    ) -> Vec<String> {
        let key = CacheKey {
            dictionary: dictionary_id.to_string(),
            query: query.to_string(),
        };
        self.clock += 1;
        let tick = self.clock;

        if let Some(entry) = self.entries.get_mut(&key) {
            self.recency.remove(&entry.last_access);
            entry.last_access = tick;
            self.recency.insert(tick, key);
            self.hits += 1;
            return entry.suggestions.clone();
        }

        self.misses += 1;
        let suggestions = compute();
        self.entries.insert(
            key.clone(),
            CacheEntry {
                suggestions: suggestions.clone(),
                last_access: tick,
            },
        );
        self.recency.insert(tick, key);
        self.evict();
        suggestions
    }

    /// Drop every entry computed against `dictionary_id`. Returns how many
    /// entries were removed.
    pub fn invalidate(&mut self, dictionary_id: &str) -> usize {
        let before = self.entries.len();
        let recency = &mut self.recency;
        self.entries.retain(|key, entry| {
            if key.dictionary == dictionary_id {
                recency.remove(&entry.last_access);
                false
            } else {
                true
            }
        });
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(dictionary = dictionary_id, removed, "invalidated cache");
        }
        removed
    }

    /// Whether an entry exists, without touching recency.
    pub fn contains(&self, dictionary_id: &str, query: &str) -> bool {
        self.entries.contains_key(&CacheKey {
            dictionary: dictionary_id.to_string(),
            query: query.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }

    fn evict(&mut self) {
        while self.entries.len() > self.capacity {
            let Some((_, key)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&key);
        }
    }
}
