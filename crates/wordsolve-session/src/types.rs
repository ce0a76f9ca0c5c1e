use wordsolve_core::settings::{AutocompleteKey, InputSettings};

/// A keystroke as observed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    Space,
    Enter,
    Tab,
    Escape,
    /// Any key pressed with Cmd/Ctrl/Alt held.
    Modified,
}

impl KeyEvent {
    pub(crate) fn is_autocomplete_key(self, key: AutocompleteKey) -> bool {
        matches!(
            (self, key),
            (KeyEvent::Tab, AutocompleteKey::Tab) | (KeyEvent::Enter, AutocompleteKey::Enter)
        )
    }
}

/// Suggestion panel action, exactly one of three states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateAction {
    /// Leave the panel as-is.
    Keep,
    /// Show or update the panel with these words, best first.
    Show(Vec<String>),
    /// Hide the panel.
    Hide,
}

/// Text edit the caller should perform on the host document: delete
/// `delete_chars` characters before the cursor, then type `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub delete_chars: usize,
    pub insert: String,
}

/// Response from `handle_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// When true the caller must swallow the keystroke.
    pub consumed: bool,
    pub replacement: Option<Replacement>,
    pub candidates: CandidateAction,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            replacement: None,
            candidates: CandidateAction::Keep,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn with_candidates(mut self, candidates: CandidateAction) -> Self {
        self.candidates = candidates;
        self
    }
}

pub(crate) struct SessionConfig {
    pub(crate) enabled: bool,
    pub(crate) autocomplete_key: AutocompleteKey,
    pub(crate) autocomplete_enabled: bool,
    pub(crate) max_word_length: usize,
    pub(crate) min_query_length: usize,
}

impl From<&InputSettings> for SessionConfig {
    fn from(s: &InputSettings) -> Self {
        Self {
            enabled: true,
            autocomplete_key: s.autocomplete_key,
            autocomplete_enabled: s.autocomplete_enabled,
            max_word_length: s.max_word_length,
            min_query_length: s.min_query_length,
        }
    }
}
