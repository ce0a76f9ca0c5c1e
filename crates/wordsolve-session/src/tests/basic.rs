use super::*;
use crate::{CandidateAction, Replacement};
use wordsolve_core::dict::WordEdit;
use wordsolve_core::manager::ManagerError;

fn shown(resp: &KeyResponse) -> Vec<String> {
    match &resp.candidates {
        CandidateAction::Show(words) => words.clone(),
        other => panic!("expected Show, got {other:?}"),
    }
}

// --- Typing ---

#[test]
fn typing_shows_suggestions() {
    let mut session = make_session();
    let resp = type_string(&mut session, "cat");
    assert!(!resp.consumed);
    assert_eq!(shown(&resp), vec!["cat", "bobcat", "catalog"]);
    assert_eq!(session.current_word(), "cat");
}

#[test]
fn uppercase_is_lowercased() {
    let mut session = make_session();
    type_string(&mut session, "CAT");
    assert_eq!(session.current_word(), "cat");
    assert_eq!(session.suggestions()[0], "cat");
}

#[test]
fn no_match_hides() {
    let mut session = make_session();
    let resp = type_string(&mut session, "zz");
    assert_eq!(resp.candidates, CandidateAction::Hide);
}

#[test]
fn non_letter_word_has_no_suggestions() {
    let mut session = make_session();
    type_string(&mut session, "ca");
    let resp = session.handle_key(KeyEvent::Char('1'));
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert_eq!(session.current_word(), "ca1");
}

#[test]
fn short_words_get_no_suggestions() {
    let mut session = make_session();
    let resp = session.handle_key(KeyEvent::Char('c'));
    assert_eq!(resp.candidates, CandidateAction::Hide);
    let resp = session.handle_key(KeyEvent::Char('a'));
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert!(session.suggestions().is_empty());
    let resp = session.handle_key(KeyEvent::Char('t'));
    assert_eq!(shown(&resp), vec!["cat", "bobcat", "catalog"]);

    let resp = session.handle_key(KeyEvent::Backspace);
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert!(session.suggestions().is_empty());
}

#[test]
fn short_words_are_not_autocompleted() {
    let mut session = make_session();
    type_string(&mut session, "bo");
    let resp = session.handle_key(KeyEvent::Tab);
    assert!(!resp.consumed);
    assert!(resp.replacement.is_none());
}

#[test]
fn min_query_length_from_settings() {
    let mut input = input_settings(AutocompleteKey::Tab);
    input.min_query_length = 1;
    let mut session = TypingSession::with_input_settings(make_test_manager(), &input);
    let resp = session.handle_key(KeyEvent::Char('d'));
    assert_eq!(shown(&resp), vec!["dog", "dogma"]);
}

#[test]
fn max_word_length_ignores_extra_chars() {
    let mut session = make_session();
    type_string(&mut session, "abcdefgh");
    let resp = session.handle_key(KeyEvent::Char('i'));
    assert_eq!(resp.candidates, CandidateAction::Keep);
    assert_eq!(session.current_word(), "abcdefgh");
}

// --- Backspace ---

#[test]
fn backspace_refreshes() {
    let mut session = make_session();
    type_string(&mut session, "dogm");
    let resp = session.handle_key(KeyEvent::Backspace);
    assert_eq!(session.current_word(), "dog");
    assert_eq!(shown(&resp), vec!["dog", "dogma"]);
}

#[test]
fn backspace_to_empty_hides() {
    let mut session = make_session();
    type_string(&mut session, "d");
    let resp = session.handle_key(KeyEvent::Backspace);
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert!(session.suggestions().is_empty());
}

#[test]
fn backspace_on_empty_word_passes_through() {
    let mut session = make_session();
    let resp = session.handle_key(KeyEvent::Backspace);
    assert!(!resp.consumed);
    assert_eq!(resp.candidates, CandidateAction::Keep);
}

// --- Word terminators ---

#[test]
fn space_ends_word() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    let resp = session.handle_key(KeyEvent::Space);
    assert!(!resp.consumed);
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert_eq!(session.current_word(), "");
}

#[test]
fn whitespace_char_ends_word() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    session.handle_key(KeyEvent::Char(' '));
    assert_eq!(session.current_word(), "");
}

#[test]
fn modified_key_ends_word_without_autocomplete() {
    let mut session = make_session();
    type_string(&mut session, "bob");
    let resp = session.handle_key(KeyEvent::Modified);
    assert!(!resp.consumed);
    assert!(resp.replacement.is_none());
    assert_eq!(session.current_word(), "");
}

// --- Autocomplete ---

#[test]
fn tab_autocompletes_top_suggestion() {
    let mut session = make_session();
    type_string(&mut session, "bob");
    let resp = session.handle_key(KeyEvent::Tab);
    assert!(resp.consumed);
    assert_eq!(
        resp.replacement,
        Some(Replacement {
            delete_chars: 3,
            insert: "bobcat ".to_string(),
        })
    );
    assert_eq!(resp.candidates, CandidateAction::Hide);
    assert_eq!(session.current_word(), "");
}

#[test]
fn enter_is_plain_terminator_when_tab_configured() {
    let mut session = make_session();
    type_string(&mut session, "bob");
    let resp = session.handle_key(KeyEvent::Enter);
    assert!(!resp.consumed);
    assert!(resp.replacement.is_none());
}

#[test]
fn enter_key_autocompletes_when_configured() {
    let mut session = make_session();
    session.set_autocomplete_key(AutocompleteKey::Enter);
    type_string(&mut session, "dogm");
    let resp = session.handle_key(KeyEvent::Enter);
    assert!(resp.consumed);
    assert_eq!(resp.replacement.unwrap().insert, "dogma ");

    type_string(&mut session, "dogm");
    assert!(!session.handle_key(KeyEvent::Tab).consumed);
}

#[test]
fn exact_match_is_not_replaced() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    let resp = session.handle_key(KeyEvent::Tab);
    assert!(!resp.consumed);
    assert!(resp.replacement.is_none());
}

#[test]
fn autocomplete_disabled() {
    let mut session = make_session();
    session.set_autocomplete_enabled(false);
    type_string(&mut session, "bob");
    assert!(!session.handle_key(KeyEvent::Tab).consumed);
}

#[test]
fn punctuation_blocks_autocomplete() {
    let mut session = make_session();
    type_string(&mut session, "bob.");
    let resp = session.handle_key(KeyEvent::Tab);
    assert!(!resp.consumed);
}

#[test]
fn nothing_to_complete() {
    let mut session = make_session();
    assert!(!session.handle_key(KeyEvent::Tab).consumed);
    type_string(&mut session, "xyz");
    assert!(!session.handle_key(KeyEvent::Tab).consumed);
}

#[test]
fn replacement_counts_chars() {
    let mut manager = make_test_manager();
    manager.register_dictionary("de", vec!["übermut".to_string()]);
    manager.set_current("de").unwrap();
    let mut session =
        TypingSession::with_input_settings(manager, &input_settings(AutocompleteKey::Tab));
    type_string(&mut session, "über");
    let resp = session.handle_key(KeyEvent::Tab);
    assert_eq!(resp.replacement.unwrap().delete_chars, 4);
}

// --- Enable / dismiss ---

#[test]
fn disabled_session_passes_through() {
    let mut session = make_session();
    type_string(&mut session, "ca");
    session.set_enabled(false);
    assert_eq!(session.current_word(), "");
    let resp = session.handle_key(KeyEvent::Char('t'));
    assert_eq!(resp, KeyResponse::not_consumed());
    assert_eq!(session.current_word(), "");

    session.set_enabled(true);
    assert!(session.is_enabled());
    type_string(&mut session, "ca");
    assert_eq!(session.current_word(), "ca");
}

#[test]
fn dismiss_clears_word() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    assert_eq!(session.dismiss(), CandidateAction::Hide);
    assert_eq!(session.current_word(), "");
    assert!(session.suggestions().is_empty());
}

// --- Dictionary changes ---

#[test]
fn select_dictionary_refreshes() {
    let mut session = make_session();
    type_string(&mut session, "par");
    assert!(session.suggestions().is_empty());
    let action = session.select_dictionary("pets").unwrap();
    assert_eq!(action, CandidateAction::Show(vec!["parrot".to_string()]));
}

#[test]
fn select_unknown_dictionary() {
    let mut session = make_session();
    let err = session.select_dictionary("nope").unwrap_err();
    assert!(matches!(err, ManagerError::NotFound(_)));
    assert_eq!(session.manager().current_name(), Some("en"));
}

#[test]
fn mutate_refreshes_suggestions() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    let action = session
        .mutate(WordEdit::Delete("catalog".to_string()))
        .unwrap();
    assert_eq!(
        action,
        CandidateAction::Show(vec!["cat".to_string(), "bobcat".to_string()])
    );
}

#[test]
fn invalid_mutation_keeps_suggestions() {
    let mut session = make_session();
    type_string(&mut session, "cat");
    let before = session.suggestions().to_vec();
    assert!(session.mutate(WordEdit::Add("c@t".to_string())).is_err());
    assert_eq!(session.suggestions(), before.as_slice());
}
