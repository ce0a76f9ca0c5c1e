//! Stateful typing session that tracks the word being typed and drives the
//! suggestion panel.
//!
//! `TypingSession` sees every keystroke, keeps the current word, asks the
//! `DictionaryManager` for suggestions after each change, and on the
//! configured autocomplete key returns a `Replacement` that swaps the typed
//! word for the top suggestion.

mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use wordsolve_core::dict::WordEdit;
use wordsolve_core::manager::{DictionaryManager, ManagerError};
use wordsolve_core::settings::{settings, AutocompleteKey, InputSettings};
use wordsolve_core::text::{char_len, is_word_token};

pub use types::{CandidateAction, KeyEvent, KeyResponse, Replacement};

use types::SessionConfig;

pub struct TypingSession {
    manager: DictionaryManager,
    config: SessionConfig,
    word: String,
    /// Suggestions currently on screen for `word`.
    suggestions: Vec<String>,
}

impl TypingSession {
    /// Session using the global `[input]` settings.
    pub fn new(manager: DictionaryManager) -> Self {
        Self::with_input_settings(manager, &settings().input)
    }

    pub fn with_input_settings(manager: DictionaryManager, input: &InputSettings) -> Self {
        Self {
            manager,
            config: SessionConfig::from(input),
            word: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Disabled sessions pass every key through. Toggling drops the current
    /// word and the suggestion list.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        self.reset();
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_autocomplete_key(&mut self, key: AutocompleteKey) {
        self.config.autocomplete_key = key;
    }

    pub fn set_autocomplete_enabled(&mut self, enabled: bool) {
        self.config.autocomplete_enabled = enabled;
    }

    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn manager(&self) -> &DictionaryManager {
        &self.manager
    }

    /// The user clicked away from the suggestion panel.
    pub fn dismiss(&mut self) -> CandidateAction {
        self.reset();
        CandidateAction::Hide
    }

    /// Switch dictionaries and recompute the visible suggestions.
    pub fn select_dictionary(&mut self, name: &str) -> Result<CandidateAction, ManagerError> {
        self.manager.set_current(name)?;
        Ok(self.refresh())
    }

    /// Edit the current dictionary and recompute the visible suggestions.
    pub fn mutate(&mut self, edit: WordEdit) -> Result<CandidateAction, ManagerError> {
        self.manager.mutate_current(edit)?;
        Ok(self.refresh())
    }

    fn reset(&mut self) {
        self.word.clear();
        self.suggestions.clear();
    }

    /// Re-query for the current word and describe the panel update. Words
    /// shorter than `min_query_length` leave the panel hidden.
    fn refresh(&mut self) -> CandidateAction {
        let long_enough = char_len(&self.word) >= self.config.min_query_length;
        self.suggestions = if long_enough && is_word_token(&self.word) {
            self.manager.suggest(&self.word)
        } else {
            Vec::new()
        };
        if self.suggestions.is_empty() {
            CandidateAction::Hide
        } else {
            CandidateAction::Show(self.suggestions.clone())
        }
    }
}
