// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping keyboard input to group intents.

use ui_events::keyboard::{Key, NamedKey};
use understory_roving::Navigation;

/// Horizontal layout direction; right-to-left flips ArrowLeft/ArrowRight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum KeyIntent {
    Navigate(Navigation),
    /// Enter or Space.
    Commit,
}

fn horizontal(forward_in_ltr: bool, direction: TextDirection) -> Navigation {
    if forward_in_ltr == (direction == TextDirection::Ltr) {
        Navigation::Next
    } else {
        Navigation::Prev
    }
}

fn is_space(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c == " ")
}

/// Radios: Up/Down and Left/Right move and select; Space activates.
pub(crate) fn radio_intent(key: &Key, direction: TextDirection) -> Option<KeyIntent> {
    if is_space(key) {
        return Some(KeyIntent::Commit);
    }
    let nav = match key {
        Key::Named(NamedKey::ArrowDown) => Navigation::Next,
        Key::Named(NamedKey::ArrowUp) => Navigation::Prev,
        Key::Named(NamedKey::ArrowRight) => horizontal(true, direction),
        Key::Named(NamedKey::ArrowLeft) => horizontal(false, direction),
        _ => return None,
    };
    Some(KeyIntent::Navigate(nav))
}

/// Tabs: Left/Right, Home/End move focus; Enter and Space commit.
pub(crate) fn tabs_intent(key: &Key, direction: TextDirection) -> Option<KeyIntent> {
    if is_space(key) {
        return Some(KeyIntent::Commit);
    }
    let nav = match key {
        Key::Named(NamedKey::Enter) => return Some(KeyIntent::Commit),
        Key::Named(NamedKey::Home) => Navigation::First,
        Key::Named(NamedKey::End) => Navigation::Last,
        Key::Named(NamedKey::ArrowRight) => horizontal(true, direction),
        Key::Named(NamedKey::ArrowLeft) => horizontal(false, direction),
        _ => return None,
    };
    Some(KeyIntent::Navigate(nav))
}
