use tracing::{debug, debug_span};

use wordsolve_core::text::{char_len, ends_with_punctuation};

use super::types::{CandidateAction, KeyEvent, KeyResponse, Replacement};
use super::TypingSession;

impl TypingSession {
    /// Process a key event. Returns a KeyResponse describing what the caller should do.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event, word = %self.word).entered();

        if !self.config.enabled {
            return KeyResponse::not_consumed();
        }

        match event {
            KeyEvent::Char(c) if c.is_whitespace() => self.end_word(),
            KeyEvent::Char(c) if c.is_control() => KeyResponse::not_consumed(),
            KeyEvent::Char(c) => self.handle_char(c),
            KeyEvent::Backspace => self.handle_backspace(),
            KeyEvent::Modified => self.end_word(),
            KeyEvent::Space | KeyEvent::Enter | KeyEvent::Tab | KeyEvent::Escape => {
                if event.is_autocomplete_key(self.config.autocomplete_key) {
                    if let Some(resp) = self.try_autocomplete() {
                        return resp;
                    }
                }
                self.end_word()
            }
        }
    }

    fn handle_char(&mut self, c: char) -> KeyResponse {
        let lower = c.to_lowercase();
        if char_len(&self.word) + lower.len() > self.config.max_word_length {
            return KeyResponse::not_consumed();
        }
        self.word.extend(lower);
        let candidates = self.refresh();
        KeyResponse::not_consumed().with_candidates(candidates)
    }

    fn handle_backspace(&mut self) -> KeyResponse {
        if self.word.pop().is_none() {
            return KeyResponse::not_consumed();
        }
        let candidates = if self.word.is_empty() {
            self.suggestions.clear();
            CandidateAction::Hide
        } else {
            self.refresh()
        };
        KeyResponse::not_consumed().with_candidates(candidates)
    }

    fn end_word(&mut self) -> KeyResponse {
        self.reset();
        KeyResponse::not_consumed().with_candidates(CandidateAction::Hide)
    }

    /// Replace the typed word with the top suggestion plus a space. `None`
    /// when there is nothing to complete, in which case the key behaves
    /// like any other word terminator.
    fn try_autocomplete(&mut self) -> Option<KeyResponse> {
        if !self.config.autocomplete_enabled
            || self.word.is_empty()
            || ends_with_punctuation(&self.word)
        {
            return None;
        }
        let top = self.suggestions.first()?;
        if *top == self.word {
            return None;
        }

        let replacement = Replacement {
            delete_chars: char_len(&self.word),
            insert: format!("{top} "),
        };
        debug!(from = %self.word, to = %top, "autocomplete");
        self.reset();

        let mut resp = KeyResponse::consumed().with_candidates(CandidateAction::Hide);
        resp.replacement = Some(replacement);
        Some(resp)
    }
}
