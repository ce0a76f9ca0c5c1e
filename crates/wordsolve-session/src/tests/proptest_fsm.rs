//! Property-based tests for the TypingSession state machine.
//!
//! Generates random key sequences via proptest and verifies that structural
//! invariants hold after every key.

use proptest::prelude::*;

use super::make_session;
use crate::{CandidateAction, KeyEvent, KeyResponse, TypingSession};

fn arb_letter() -> impl Strategy<Value = char> {
    // Letters from the test dictionary at higher weight so suggestions appear.
    prop_oneof![
        4 => prop::sample::select(vec!['c', 'a', 't', 'd', 'o', 'g', 'b']),
        1 => prop::sample::select(vec!['x', 'z', 'q', 'M', 'Ü']),
    ]
}

fn arb_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        50 => arb_letter().prop_map(KeyEvent::Char),
        3 => prop::sample::select(vec!['.', ',', '!', '1', ' ']).prop_map(KeyEvent::Char),
        10 => Just(KeyEvent::Backspace),
        6 => Just(KeyEvent::Space),
        5 => Just(KeyEvent::Enter),
        6 => Just(KeyEvent::Tab),
        3 => Just(KeyEvent::Escape),
        2 => Just(KeyEvent::Modified),
    ]
}

fn assert_invariants(session: &TypingSession, resp: &KeyResponse, key: KeyEvent) {
    // 1. Word never exceeds the configured cap (8 in tests).
    assert!(
        session.current_word().chars().count() <= 8,
        "word {:?} too long after {:?}",
        session.current_word(),
        key,
    );

    // 2. Only autocomplete consumes, and it always carries a replacement.
    assert_eq!(
        resp.consumed,
        resp.replacement.is_some(),
        "consumed without replacement (or vice versa) after {:?}",
        key,
    );

    // 3. A replacement deletes exactly the word that was typed and inserts a
    //    different word followed by one space.
    if let Some(r) = &resp.replacement {
        assert!(r.delete_chars > 0);
        assert!(r.insert.ends_with(' ') && !r.insert.ends_with("  "));
        assert!(session.current_word().is_empty());
    }

    // 4. Show is never empty and matches what the session holds.
    if let CandidateAction::Show(words) = &resp.candidates {
        assert!(!words.is_empty(), "empty Show after {:?}", key);
        assert_eq!(words.as_slice(), session.suggestions());
    }

    // 5. No word, no suggestions.
    if session.current_word().is_empty() {
        assert!(session.suggestions().is_empty());
    }

    // 6. Suggestions are sorted by length.
    let lens: Vec<usize> = session
        .suggestions()
        .iter()
        .map(|w| w.chars().count())
        .collect();
    assert!(lens.windows(2).all(|w| w[0] <= w[1]), "unsorted after {:?}", key);

    // 7. Terminators always leave an empty word.
    if matches!(
        key,
        KeyEvent::Space | KeyEvent::Enter | KeyEvent::Tab | KeyEvent::Escape | KeyEvent::Modified
    ) {
        assert!(session.current_word().is_empty());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn session_invariants_hold(keys in prop::collection::vec(arb_key(), 1..100)) {
        let mut session = make_session();
        for &key in &keys {
            let resp = session.handle_key(key);
            assert_invariants(&session, &resp, key);
        }
    }

    #[test]
    fn disabled_session_is_inert(keys in prop::collection::vec(arb_key(), 1..50)) {
        let mut session = make_session();
        session.set_enabled(false);
        for &key in &keys {
            let resp = session.handle_key(key);
            prop_assert_eq!(resp, KeyResponse::not_consumed());
            prop_assert!(session.current_word().is_empty());
        }
    }
}
