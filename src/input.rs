// Pure input mapping shared by the keyboard wiring and the host-side tests.

use crate::constants::{KEY_NEXT_MODE, KEY_PREVIOUS_MODE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    PreviousMode,
    NextMode,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        k if k == KEY_PREVIOUS_MODE => Some(KeyAction::PreviousMode),
        k if k == KEY_NEXT_MODE => Some(KeyAction::NextMode),
        _ => None,
    }
}

/// Keys typed into form fields must not switch modes.
#[inline]
pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
