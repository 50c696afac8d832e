// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn brackets_cycle_modes() {
    assert_eq!(key_action("["), Some(KeyAction::PreviousMode));
    assert_eq!(key_action("]"), Some(KeyAction::NextMode));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["{", "}", "ArrowLeft", "a", " ", ""] {
        assert_eq!(key_action(key), None, "key {:?}", key);
    }
}

#[test]
fn form_fields_swallow_mode_keys() {
    assert!(is_text_entry("INPUT"));
    assert!(is_text_entry("textarea"));
    assert!(is_text_entry("Select"));
    assert!(!is_text_entry("DIV"));
    assert!(!is_text_entry("CANVAS"));
}
