//! Terminal input events.
//!
//! Front ends map their native key handling to these variants. The shell
//! core never sees raw key codes.

use serde::{Deserialize, Serialize};

/// A platform-agnostic terminal input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Character typed into the input buffer.
    TextInput(char),
    /// Delete the last character of the input buffer.
    Backspace,
    /// Submit the input buffer (Enter).
    Submit,
    /// Recall an older history entry (arrow up).
    RecallPrevious,
    /// Recall a newer history entry (arrow down).
    RecallNext,
}

impl InputEvent {
    /// Whether this event navigates history rather than editing the buffer.
    pub fn is_recall(&self) -> bool {
        matches!(self, Self::RecallPrevious | Self::RecallNext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_carries_char() {
        let e = InputEvent::TextInput('x');
        if let InputEvent::TextInput(c) = e {
            assert_eq!(c, 'x');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn text_input_unicode() {
        assert_eq!(InputEvent::TextInput('│'), InputEvent::TextInput('│'));
    }

    #[test]
    fn recall_variants_differ() {
        assert_ne!(InputEvent::RecallPrevious, InputEvent::RecallNext);
    }

    #[test]
    fn is_recall_only_for_history_keys() {
        assert!(InputEvent::RecallPrevious.is_recall());
        assert!(InputEvent::RecallNext.is_recall());
        assert!(!InputEvent::Submit.is_recall());
        assert!(!InputEvent::Backspace.is_recall());
        assert!(!InputEvent::TextInput('a').is_recall());
    }

    #[test]
    fn serde_roundtrip_through_json() {
        let events = [
            InputEvent::TextInput('d'),
            InputEvent::Backspace,
            InputEvent::Submit,
            InputEvent::RecallPrevious,
            InputEvent::RecallNext,
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }
}
