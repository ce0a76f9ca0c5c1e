mod basic;
mod proptest_fsm;

use wordsolve_core::engine::SuggestionEngine;
use wordsolve_core::manager::DictionaryManager;
use wordsolve_core::settings::{AutocompleteKey, InputSettings};

use super::{KeyEvent, KeyResponse, TypingSession};

pub(super) fn make_test_manager() -> DictionaryManager {
    let mut manager = DictionaryManager::with_engine(SuggestionEngine::default(), 64);
    let words = ["cat", "catalog", "attic", "bobcat", "dog", "dogma"];
    manager.register_dictionary("en", words.iter().map(|w| w.to_string()).collect());
    manager.register_dictionary("pets", vec!["parrot".to_string(), "puppy".to_string()]);
    manager
        .set_current("en")
        .expect("test dictionary is registered");
    manager
}

pub(super) fn input_settings(key: AutocompleteKey) -> InputSettings {
    InputSettings {
        autocomplete_key: key,
        autocomplete_enabled: true,
        max_word_length: 8,
        min_query_length: 3,
    }
}

pub(super) fn make_session() -> TypingSession {
    TypingSession::with_input_settings(make_test_manager(), &input_settings(AutocompleteKey::Tab))
}

/// Type each char; returns the last response.
pub(super) fn type_string(session: &mut TypingSession, s: &str) -> KeyResponse {
    let mut last = None;
    for c in s.chars() {
        last = Some(session.handle_key(KeyEvent::Char(c)));
    }
    last.expect("type_string needs a non-empty string")
}
