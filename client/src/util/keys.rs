//! Composer keyboard handling.
//!
//! Enter on its own submits the message. Enter with any modifier is left to
//! the browser, which is how Shift+Enter inserts a newline in the textarea.
//! Enter that confirms an IME composition never submits.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Modifier keys held during a keypress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Read the modifier state of a DOM keyboard event.
    pub fn from_event(ev: &leptos::ev::KeyboardEvent) -> Self {
        Self { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
    }

    fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// What the composer should do with a keypress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerKey {
    /// Plain Enter: prevent the default newline and send.
    Submit,
    /// Modified Enter: keep the browser default (newline for Shift).
    Newline,
    /// Any other key.
    Other,
}

/// Classify a keypress by its `KeyboardEvent.key` value and modifiers.
///
/// Keys pressed while an IME composition is active belong to the input
/// method, so Enter then only commits the composed text.
pub fn classify_key(key: &str, modifiers: Modifiers, composing: bool) -> ComposerKey {
    match key {
        _ if composing => ComposerKey::Other,
        "Enter" if modifiers.any() => ComposerKey::Newline,
        "Enter" => ComposerKey::Submit,
        _ => ComposerKey::Other,
    }
}
