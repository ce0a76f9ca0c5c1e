//! Registry of named dictionaries and the entry point for suggestions.
//!
//! `DictionaryManager` owns every `Dictionary`, the suggestion engine and the
//! cache. Callers hold the manager itself rather than references into it, so
//! no trie reference can outlive a dictionary swap. All mutation goes through
//! `&mut self`: rebuilding a dictionary's tries and invalidating its cache
//! namespace happen in the same call, before any later query.


use std::collections::HashMap;
use std::path::Path;

use tracing::{debug_span, info, warn};

use crate::cache::{CacheStats, SuggestionCache};
use crate::dict::{DictError, Dictionary, ValidationError, WordEdit, WordListFile, WordSource};
use crate::engine::{SuggestionEngine, SuggestionLimits, SuggestionTiers};
use crate::settings::{settings, Settings};

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("no dictionary named {0:?}")]
    NotFound(String),

    #[error("word not found: {0}")]
    WordNotFound(String),

    #[error("no dictionary is current")]
    NoCurrentDictionary,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to load {source_name}: {error}")]
    Load {
        source_name: String,
        #[source]
        error: DictError,
    },
}

impl From<DictError> for ManagerError {
    fn from(e: DictError) -> Self {
        match e {
            DictError::Validation(v) => ManagerError::Validation(v),
            DictError::WordNotFound(w) => ManagerError::WordNotFound(w),
            DictError::Io(_) => ManagerError::Load {
                source_name: "word list".to_string(),
                error: e,
            },
        }
    }
}

/// Lightweight description of a registered dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryHandle {
    pub name: String,
    pub word_count: usize,
    pub generation: u64,
}

impl DictionaryHandle {
    fn of(dict: &Dictionary) -> Self {
        Self {
            name: dict.name().to_string(),
            word_count: dict.len(),
            generation: dict.generation(),
        }
    }
}

pub struct DictionaryManager {
    dictionaries: HashMap<String, Dictionary>,
    current: Option<String>,
    engine: SuggestionEngine,
    cache: SuggestionCache,
}

impl Default for DictionaryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryManager {
    /// Empty manager configured from the global settings.
    pub fn new() -> Self {
        let s = settings();
        Self::with_engine(
            SuggestionEngine::new(SuggestionLimits::from(&s.suggest)),
            s.cache.capacity,
        )
    }

    pub fn with_engine(engine: SuggestionEngine, cache_capacity: usize) -> Self {
        Self {
            dictionaries: HashMap::new(),
            current: None,
            engine,
            cache: SuggestionCache::new(cache_capacity),
        }
    }

    /// Load every configured word list, resolving file paths against
    /// `base_dir`. Lists that fail to load are logged and skipped. The
    /// configured `current` list is selected, falling back to the last list
    /// that loaded.
    pub fn from_settings(s: &Settings, base_dir: &Path) -> Self {
        let mut manager = Self::with_engine(
            SuggestionEngine::new(SuggestionLimits::from(&s.suggest)),
            s.cache.capacity,
        );

        let mut last_loaded = None;
        for list in &s.word_lists {
            let source = WordListFile::new(base_dir.join(&list.file));
            match manager.load(&list.name, &source) {
                Ok(handle) => last_loaded = Some(handle.name),
                Err(e) => warn!(name = %list.name, error = %e, "skipping word list"),
            }
        }

        let preferred = s.current.as_ref().filter(|name| {
            let loaded = manager.contains(name);
            if !loaded {
                warn!(name = %name, "configured word list did not load");
            }
            loaded
        });
        if let Some(name) = preferred.cloned().or(last_loaded) {
            manager.current = Some(name);
        }
        manager
    }

    /// Build the tries for `words` and store them under `name`, replacing and
    /// invalidating any dictionary already registered there.
    pub fn register_dictionary(
        &mut self,
        name: impl Into<String>,
        words: Vec<String>,
    ) -> DictionaryHandle {
        let name = name.into();
        let dict = Dictionary::new(name.clone(), words);
        let handle = DictionaryHandle::of(&dict);
        if self.dictionaries.insert(name.clone(), dict).is_some() {
            self.cache.invalidate(&name);
        }
        info!(dictionary = %name, word_count = handle.word_count, "registered dictionary");
        handle
    }

    /// Read `source` and register the result under `name`.
    pub fn load(
        &mut self,
        name: impl Into<String>,
        source: &dyn WordSource,
    ) -> Result<DictionaryHandle, ManagerError> {
        let words = source.read_words().map_err(|error| ManagerError::Load {
            source_name: source.describe(),
            error,
        })?;
        Ok(self.register_dictionary(name, words))
    }

    /// Select the dictionary used by `suggest` and `mutate_current`.
    ///
    /// Switching to a different dictionary discards whatever the cache held
    /// for it, so a newly selected dictionary always starts fresh.
    pub fn set_current(&mut self, name: &str) -> Result<(), ManagerError> {
        if !self.dictionaries.contains_key(name) {
            return Err(ManagerError::NotFound(name.to_string()));
        }
        if self.current.as_deref() != Some(name) {
            self.cache.invalidate(name);
            self.current = Some(name.to_string());
            info!(dictionary = name, "current dictionary changed");
        }
        Ok(())
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&Dictionary> {
        self.current
            .as_deref()
            .and_then(|name| self.dictionaries.get(name))
    }

    /// Ranked suggestions for `query` from the current dictionary.
    ///
    /// Empty when no dictionary is current or the query is empty.
    pub fn suggest(&mut self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let Some(dict) = self
            .current
            .as_deref()
            .and_then(|name| self.dictionaries.get(name))
        else {
            return Vec::new();
        };
        self.cache.get_or_compute(&self.engine, dict, query)
    }

    /// Per-tier breakdown for `query`, bypassing the cache.
    pub fn explain(&self, query: &str) -> SuggestionTiers {
        match self.current() {
            Some(dict) => self.engine.tiers(query, dict),
            None => SuggestionTiers::default(),
        }
    }

    /// Apply `op` to the current dictionary. On success the dictionary's cache
    /// namespace is invalidated; on failure nothing changes.
    pub fn mutate_current(&mut self, op: WordEdit) -> Result<(), ManagerError> {
        let name = self
            .current
            .clone()
            .ok_or(ManagerError::NoCurrentDictionary)?;
        let _span = debug_span!("mutate", dictionary = %name, ?op).entered();
        let dict = self
            .dictionaries
            .get_mut(&name)
            .ok_or_else(|| ManagerError::NotFound(name.clone()))?;
        if dict.apply(&op)? {
            self.cache.invalidate(&name);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Dictionary> {
        self.dictionaries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dictionaries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Unregister `name`. Removing the current dictionary leaves none current.
    pub fn remove(&mut self, name: &str) -> Option<Dictionary> {
        let dict = self.dictionaries.remove(name)?;
        self.cache.invalidate(name);
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Some(dict)
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
