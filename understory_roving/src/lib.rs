// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roving --heading-base-level=0

//! Understory Roving: a roving tab stop for grouped controls.
//!
//! Composite widgets such as radio groups, tab lists, and toolbars expose a
//! single keyboard tab stop: exactly one member has `tabindex="0"` and every
//! other member has `tabindex="-1"`. Arrow keys move that tab stop (and
//! focus) between members; Tab leaves the group entirely.
//!
//! This crate provides the bookkeeping for that pattern:
//!
//! - [`RovingSpace`]: a borrowed, ordered view of the group's members and
//!   whether each one is enabled. Callers rebuild it whenever they like, so
//!   reordering members is reflected immediately.
//! - [`RovingFocus`]: the tab stop and the currently focused member, plus
//!   linear navigation ([`Navigation`]) that skips disabled members and wraps
//!   around the ends ([`WrapMode`]).
//!
//! The crate does not move real focus. [`RovingFocus::navigate`] returns the
//! member that should receive focus; the caller focuses it.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_roving::{Navigation, RovingEntry, RovingFocus, RovingSpace};
//!
//! let members = [
//!     RovingEntry { id: 'a', enabled: true },
//!     RovingEntry { id: 'b', enabled: false },
//!     RovingEntry { id: 'c', enabled: true },
//! ];
//! let space = RovingSpace { members: &members };
//!
//! let mut roving = RovingFocus::new();
//! roving.reconcile(&space);
//! assert_eq!(roving.tab_stop(), Some('a'));
//!
//! // Disabled members are skipped, and navigation wraps around.
//! assert_eq!(roving.navigate(Navigation::Next, 'a', &space), Some('c'));
//! assert_eq!(roving.navigate(Navigation::Next, 'c', &space), Some('a'));
//! assert_eq!(roving.tab_index(&'a'), 0);
//! assert_eq!(roving.tab_index(&'c'), -1);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

/// A member of a roving focus group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RovingEntry<K> {
    /// Caller-defined identifier.
    pub id: K,
    /// Disabled members are never the tab stop and are skipped by navigation.
    pub enabled: bool,
}

/// An ordered view of a group's members.
///
/// Order is navigation order (typically document order).
#[derive(Copy, Clone, Debug)]
pub struct RovingSpace<'a, K> {
    /// Members in navigation order.
    pub members: &'a [RovingEntry<K>],
}

impl<K: Copy + Eq> RovingSpace<'_, K> {
    /// Index of `id` in the space.
    #[must_use]
    pub fn position(&self, id: &K) -> Option<usize> {
        self.members.iter().position(|e| &e.id == id)
    }

    /// Returns `true` if `id` is present and enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &K) -> bool {
        self.members.iter().any(|e| &e.id == id && e.enabled)
    }

    /// First enabled member.
    #[must_use]
    pub fn first_enabled(&self) -> Option<K> {
        self.members.iter().find(|e| e.enabled).map(|e| e.id)
    }

    /// Last enabled member.
    #[must_use]
    pub fn last_enabled(&self) -> Option<K> {
        self.members.iter().rev().find(|e| e.enabled).map(|e| e.id)
    }

    /// Walk from `start` one member at a time, returning the first enabled one.
    fn step(&self, start: usize, forward: bool, wrap: WrapMode) -> Option<K> {
        let len = self.members.len();
        for offset in 1..len {
            let idx = match (wrap, forward) {
                (WrapMode::Wrap, true) => (start + offset) % len,
                (WrapMode::Wrap, false) => (start + len - offset) % len,
                (WrapMode::Clamp, true) if start + offset < len => start + offset,
                (WrapMode::Clamp, false) if offset <= start => start - offset,
                (WrapMode::Clamp, _) => return None,
            };
            let entry = &self.members[idx];
            if entry.enabled {
                return Some(entry.id);
            }
        }
        None
    }
}

/// Linear navigation intent within a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Next enabled member (ArrowRight/ArrowDown in left-to-right layouts).
    Next,
    /// Previous enabled member.
    Prev,
    /// First enabled member (Home).
    First,
    /// Last enabled member (End).
    Last,
}

/// Behavior of [`Navigation::Next`]/[`Navigation::Prev`] at the ends of the group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Continue from the other end.
    #[default]
    Wrap,
    /// Stop at the ends.
    Clamp,
}

/// Roving tab stop state for one group.
///
/// Holds identifiers only. After membership or enabled-state changes, call
/// [`RovingFocus::reconcile`] (or [`RovingFocus::remove`] for removals) to
/// keep exactly one enabled member as the tab stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RovingFocus<K> {
    tab_stop: Option<K>,
    active: Option<K>,
    wrap: WrapMode,
}

impl<K> Default for RovingFocus<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RovingFocus<K> {
    /// Create a roving focus with no tab stop that wraps at the ends.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_wrap(WrapMode::Wrap)
    }

    /// Create a roving focus with the given wrap behavior.
    #[must_use]
    pub const fn with_wrap(wrap: WrapMode) -> Self {
        Self {
            tab_stop: None,
            active: None,
            wrap,
        }
    }

    /// Wrap behavior at the ends of the group.
    #[must_use]
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Change the wrap behavior.
    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    /// Forget the focused member; the tab stop is kept.
    pub fn focus_out(&mut self) {
        self.active = None;
    }
}

impl<K: Copy + Eq> RovingFocus<K> {
    /// The member currently reachable with Tab.
    #[must_use]
    pub fn tab_stop(&self) -> Option<K> {
        self.tab_stop
    }

    /// The member that currently holds focus, if focus is inside the group.
    #[must_use]
    pub fn active(&self) -> Option<K> {
        self.active
    }

    /// `0` for the tab stop, `-1` for everyone else.
    #[must_use]
    pub fn tab_index(&self, id: &K) -> i32 {
        if self.tab_stop.as_ref() == Some(id) {
            0
        } else {
            -1
        }
    }

    /// Record that `id` received focus; it becomes the tab stop.
    ///
    /// Returns `false` (and changes nothing) if `id` is not an enabled member.
    pub fn focus_in(&mut self, id: K, space: &RovingSpace<'_, K>) -> bool {
        if !space.is_enabled(&id) {
            return false;
        }
        self.tab_stop = Some(id);
        self.active = Some(id);
        true
    }

    /// Make `id` the tab stop without focusing it.
    ///
    /// Returns `false` if `id` is not an enabled member.
    pub fn set_tab_stop(&mut self, id: K, space: &RovingSpace<'_, K>) -> bool {
        if !space.is_enabled(&id) {
            return false;
        }
        self.tab_stop = Some(id);
        true
    }

    /// Move focus from `from` according to `nav`.
    ///
    /// Returns the member that should receive focus, after making it the tab
    /// stop. Returns `None` when focus does not move: no other member is
    /// enabled, the end was reached with [`WrapMode::Clamp`], or the target
    /// is `from` itself.
    ///
    /// If `from` is not in the space, `Next` starts at the first enabled
    /// member and `Prev` at the last.
    pub fn navigate(&mut self, nav: Navigation, from: K, space: &RovingSpace<'_, K>) -> Option<K> {
        let target = match (nav, space.position(&from)) {
            (Navigation::First, _) | (Navigation::Next, None) => space.first_enabled(),
            (Navigation::Last, _) | (Navigation::Prev, None) => space.last_enabled(),
            (Navigation::Next, Some(start)) => space.step(start, true, self.wrap),
            (Navigation::Prev, Some(start)) => space.step(start, false, self.wrap),
        }?;
        if target == from {
            return None;
        }
        self.tab_stop = Some(target);
        self.active = Some(target);
        Some(target)
    }

    /// Restore the single-tab-stop invariant after the space changed.
    ///
    /// Keeps the current tab stop if it is still present and enabled;
    /// otherwise picks the first enabled member. With no enabled members the
    /// group has no tab stop. A focused member that is gone or disabled is
    /// forgotten.
    pub fn reconcile(&mut self, space: &RovingSpace<'_, K>) -> Option<K> {
        if self.active.is_some_and(|id| !space.is_enabled(&id)) {
            self.active = None;
        }
        if !self.tab_stop.is_some_and(|id| space.is_enabled(&id)) {
            self.tab_stop = space.first_enabled();
        }
        self.tab_stop
    }

    /// Remove `id` from the group.
    ///
    /// `space_before` is the space as it was before the removal. If `id` was
    /// the tab stop, the tab stop moves to the next enabled member after it,
    /// or failing that the nearest enabled member before it.
    pub fn remove(&mut self, id: &K, space_before: &RovingSpace<'_, K>) -> Option<K> {
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        if self.tab_stop.as_ref() != Some(id) {
            return self.tab_stop;
        }
        self.tab_stop = space_before.position(id).and_then(|idx| {
            let members = space_before.members;
            members[idx + 1..]
                .iter()
                .find(|e| e.enabled)
                .or_else(|| members[..idx].iter().rev().find(|e| e.enabled))
                .map(|e| e.id)
        });
        self.tab_stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(enabled: &[bool]) -> [RovingEntry<usize>; 4] {
        let mut out = [RovingEntry {
            id: 0,
            enabled: false,
        }; 4];
        for (i, e) in enabled.iter().enumerate() {
            out[i] = RovingEntry { id: i, enabled: *e };
        }
        out
    }

    #[test]
    fn step_wraps_both_ways() {
        let members = entries(&[true, true, true, true]);
        let space = RovingSpace { members: &members };
        assert_eq!(space.step(3, true, WrapMode::Wrap), Some(0));
        assert_eq!(space.step(0, false, WrapMode::Wrap), Some(3));
    }

    #[test]
    fn step_clamps_at_ends() {
        let members = entries(&[true, true, true, true]);
        let space = RovingSpace { members: &members };
        assert_eq!(space.step(3, true, WrapMode::Clamp), None);
        assert_eq!(space.step(0, false, WrapMode::Clamp), None);
        assert_eq!(space.step(1, false, WrapMode::Clamp), Some(0));
    }

    #[test]
    fn step_never_returns_start() {
        let members = entries(&[true, false, false, false]);
        let space = RovingSpace { members: &members };
        assert_eq!(space.step(0, true, WrapMode::Wrap), None);
    }

    #[test]
    fn single_member_space() {
        let members = [RovingEntry { id: 7, enabled: true }];
        let space = RovingSpace { members: &members };
        assert_eq!(space.step(0, true, WrapMode::Wrap), None);
    }
}
