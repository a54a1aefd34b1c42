// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_choice --heading-base-level=0

//! Understory Choice: exclusive-choice bookkeeping.
//!
//! This crate tracks _which one_ of a set of registered keys is currently
//! chosen, for controls where at most one member of a group may be on at a
//! time: radio buttons sharing a name, tabs in a tab list, segmented buttons.
//! It does **not** own the members themselves and knows nothing about how
//! they are rendered, ordered, or focused. Callers keep the per-member
//! `checked` flag wherever they like and apply the [`Transition`]s this crate
//! reports.
//!
//! The core type is [`ExclusiveSelection`], which records:
//! - The registered keys, in registration order.
//! - The currently selected key, if any.
//! - A monotonically increasing **revision** counter that bumps when the
//!   selection or membership changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_choice::{ExclusiveSelection, Registration, Transition};
//!
//! let mut group = ExclusiveSelection::<u32>::new();
//!
//! // Two members declared `checked`: the first registrant wins.
//! assert_eq!(group.register(1, true), Registration::Selected);
//! assert_eq!(group.register(2, true), Registration::Demoted);
//! assert_eq!(group.selected(), Some(1));
//!
//! // Member 2 is checked by the user: member 1 must be unchecked.
//! let t = group.notify_checked(2).unwrap();
//! assert_eq!(t, Transition { previous: Some(1), selected: Some(2) });
//!
//! // Checking it again is a no-op.
//! assert!(group.notify_checked(2).is_none());
//! ```
//!
//! ## Keeping flags in sync
//!
//! Members usually expose a `checked` property that can be assigned directly.
//! Route every assignment through [`ExclusiveSelection::handle_checked_change`]
//! and apply the returned transition to the previous member:
//!
//! ```rust
//! use understory_choice::ExclusiveSelection;
//!
//! let mut checked = [false, false, false];
//! let mut group = ExclusiveSelection::new();
//! for key in 0..checked.len() {
//!     group.register(key, checked[key]);
//! }
//!
//! let mut set_checked = |group: &mut ExclusiveSelection<usize>, key: usize, value: bool| {
//!     checked[key] = value;
//!     if let Some(t) = group.handle_checked_change(key, value)
//!         && let Some(prev) = t.previous
//!         && Some(prev) != t.selected
//!     {
//!         checked[prev] = false;
//!     }
//!     checked
//! };
//!
//! assert_eq!(set_checked(&mut group, 0, true), [true, false, false]);
//! assert_eq!(set_checked(&mut group, 2, true), [false, false, true]);
//! assert_eq!(set_checked(&mut group, 2, false), [false, false, false]);
//! assert_eq!(group.selected(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Outcome of [`ExclusiveSelection::register`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The key was added and is not selected.
    Added,
    /// The key was added while declared checked, and nothing else was
    /// selected, so it is now the selection.
    Selected,
    /// The key was added while declared checked, but another key was already
    /// selected. The caller must clear the new member's checked flag.
    Demoted,
    /// The key was already registered; nothing changed.
    AlreadyRegistered,
}

/// A change of the selected key.
///
/// `previous` is the key that was selected before the change and must now be
/// reported as unchecked; `selected` is the key selected afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition<K> {
    /// The key that was selected before, if any.
    pub previous: Option<K>,
    /// The key selected after the change, if any.
    pub selected: Option<K>,
}

/// At-most-one selection over a set of registered keys.
///
/// `ExclusiveSelection` holds keys only; it never owns the members they
/// refer to. Membership is stored in a small `Vec<K>` and checked by
/// equality, so keys only need `Copy + Eq`.
///
/// All operations are no-ops for unregistered keys. This tolerates embedders
/// where members attach asynchronously and a state change can arrive before
/// registration.
#[derive(Clone, Debug)]
pub struct ExclusiveSelection<K> {
    keys: Vec<K>,
    selected: Option<K>,
    revision: u64,
}

impl<K> Default for ExclusiveSelection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> ExclusiveSelection<K> {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            selected: None,
            revision: 0,
        }
    }

    /// Returns `true` if no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the registered keys in registration order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Returns the current revision counter.
    ///
    /// Bumped whenever the selected key or the set of registered keys
    /// changes. No-op calls leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> ExclusiveSelection<K>
where
    K: Copy + Eq,
{
    /// Returns the selected key, if any.
    #[must_use]
    pub fn selected(&self) -> Option<K> {
        self.selected
    }

    /// Returns `true` if `key` is the selected key.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Returns `true` if `key` is registered.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Registers `key`, declared `checked` or not.
    ///
    /// When several members are declared checked, the first one to register
    /// keeps its state and every later one is [`Registration::Demoted`]. This
    /// matches how duplicate `checked` declarations resolve in document order.
    pub fn register(&mut self, key: K, checked: bool) -> Registration {
        if self.contains(&key) {
            return Registration::AlreadyRegistered;
        }
        self.keys.push(key);
        self.bump_revision();

        if !checked {
            return Registration::Added;
        }
        if self.selected.is_some() {
            return Registration::Demoted;
        }
        self.selected = Some(key);
        Registration::Selected
    }

    /// Removes `key`, returning `true` if it was the selected key.
    ///
    /// Removing the selected key leaves the group without a selection; no
    /// sibling is selected in its place.
    pub fn deregister(&mut self, key: &K) -> bool {
        let Some(idx) = self.keys.iter().position(|k| k == key) else {
            return false;
        };
        self.keys.remove(idx);
        let was_selected = self.is_selected(key);
        if was_selected {
            self.selected = None;
        }
        self.bump_revision();
        was_selected
    }

    /// Records that `key` became checked.
    ///
    /// Returns the transition the caller must apply (uncheck `previous`), or
    /// `None` if `key` is unregistered or already selected. The selection is
    /// replaced in one step, so no observer can see two selected keys.
    pub fn notify_checked(&mut self, key: K) -> Option<Transition<K>> {
        if self.is_selected(&key) || !self.contains(&key) {
            return None;
        }
        let previous = self.selected.replace(key);
        self.bump_revision();
        Some(Transition {
            previous,
            selected: Some(key),
        })
    }

    /// Records that `key` became unchecked.
    ///
    /// Unchecking the selected key clears the selection. Unchecking any other
    /// key is a no-op.
    pub fn notify_unchecked(&mut self, key: &K) -> Option<Transition<K>> {
        if !self.is_selected(key) {
            return None;
        }
        let previous = self.selected.take();
        self.bump_revision();
        Some(Transition {
            previous,
            selected: None,
        })
    }

    /// Reconciles the group after a member's checked flag was set directly.
    pub fn handle_checked_change(&mut self, key: K, checked: bool) -> Option<Transition<K>> {
        if checked {
            self.notify_checked(key)
        } else {
            self.notify_unchecked(&key)
        }
    }

    /// Clears the selection, keeping all keys registered.
    pub fn clear(&mut self) -> Option<Transition<K>> {
        let previous = self.selected.take()?;
        self.bump_revision();
        Some(Transition {
            previous: Some(previous),
            selected: None,
        })
    }
}
