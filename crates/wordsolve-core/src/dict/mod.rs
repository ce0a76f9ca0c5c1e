//! Named word lists and the trie pair built over them.
//!
//! A `Dictionary` keeps its forward trie (prefix matching) and reverse trie
//! (suffix matching) in one `TriePair` value. Every mutation validates first
//! and only then touches the words and both tries, so a failed edit leaves the
//! dictionary exactly as it was.

mod source;

pub use source::{parse_words, LoadReport, WordListFile, WordSource};

use std::io;

use tracing::{debug, debug_span};

use crate::text::normalize_word;
use crate::trie::Trie;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("word not found: {0}")]
    WordNotFound(String),
}

/// Rejected word token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("empty word")]
    Empty,
    #[error("not an alphabetic word: {0:?}")]
    NonAlphabetic(String),
    #[error("word is {0} characters long, limit is {max}", max = crate::text::MAX_WORD_CHARS)]
    TooLong(usize),
}

/// An edit to a dictionary's word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEdit {
    Add(String),
    Edit { old: String, new: String },
    Delete(String),
}

/// Forward and reverse tries over the same word set.
#[derive(Debug, Clone, Default)]
pub struct TriePair {
    pub forward: Trie,
    pub reverse: Trie,
}

impl TriePair {
    pub fn build<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            forward: Trie::from_words(words, false),
            reverse: Trie::from_words(words, true),
        }
    }

    fn insert(&mut self, word: &str) {
        self.forward.insert(word, false);
        self.reverse.insert(word, true);
    }

    fn remove(&mut self, word: &str) {
        self.forward.remove(word, false);
        self.reverse.remove(word, true);
    }
}

pub struct Dictionary {
    name: String,
    words: Vec<String>,
    tries: TriePair,
    /// Bumped on every change to the word set.
    generation: u64,
}

impl Dictionary {
    /// Build a dictionary from already-validated lowercase word tokens.
    pub fn new(name: impl Into<String>, words: Vec<String>) -> Self {
        let name = name.into();
        let _span = debug_span!("rebuild", dictionary = %name, word_count = words.len()).entered();
        let tries = TriePair::build(&words);
        Self {
            name,
            words,
            tries,
            generation: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Words in list order (may repeat if the source repeated them).
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.tries.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tries.forward.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tries.forward.contains(word, false)
    }

    pub fn tries(&self) -> &TriePair {
        &self.tries
    }

    /// Replace the whole word list, rebuilding both tries together.
    pub fn reload(&mut self, words: Vec<String>) {
        let _span =
            debug_span!("rebuild", dictionary = %self.name, word_count = words.len()).entered();
        self.tries = TriePair::build(&words);
        self.words = words;
        self.generation += 1;
    }

    /// Normalize `raw` the way `Add` does and require it to be stored.
    fn lookup(&self, raw: &str) -> Result<String, DictError> {
        let word = normalize_word(raw)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(DictError::WordNotFound(raw.trim().to_string()))
        }
    }

    /// Apply an edit. Returns `Ok(false)` when the word set is unchanged
    /// (adding a present word, or renaming a word to itself).
    pub fn apply(&mut self, edit: &WordEdit) -> Result<bool, DictError> {
        let changed = match edit {
            WordEdit::Add(raw) => {
                let word = normalize_word(raw)?;
                if self.contains(&word) {
                    false
                } else {
                    self.tries.insert(&word);
                    self.words.push(word);
                    true
                }
            }
            WordEdit::Edit { old, new } => {
                let old = self.lookup(old)?;
                let new = normalize_word(new)?;
                if old == new {
                    false
                } else {
                    self.words.retain(|w| *w != old);
                    self.tries.remove(&old);
                    if !self.contains(&new) {
                        self.tries.insert(&new);
                        self.words.push(new);
                    }
                    true
                }
            }
            WordEdit::Delete(raw) => {
                let word = self.lookup(raw)?;
                self.words.retain(|w| *w != word);
                self.tries.remove(&word);
                true
            }
        };

        if changed {
            self.generation += 1;
            debug!(dictionary = %self.name, ?edit, generation = self.generation, "applied edit");
        }
        Ok(changed)
    }
}
