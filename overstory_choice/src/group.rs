// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic group: one selection controller and one roving focus controller.

use alloc::vec::Vec;

use understory_choice::{ExclusiveSelection, Registration};
use understory_roving::{Navigation, RovingEntry, RovingFocus, RovingSpace, WrapMode};

use crate::{MemberArena, MemberId, RovingFocusable, Selectable, Update};

/// Coordinates selection and roving focus for one group of members.
///
/// A `Group` holds member ids only. Members live in a [`MemberArena`] owned
/// by the container, and every operation receives the arena together with
/// the group's members in document order. Passing the order on each call
/// means reordering members is reflected immediately.
///
/// [`RadioSet`](crate::RadioSet) and [`Tabs`](crate::Tabs) are built on this
/// type; custom one-of-many widgets can be too.
#[derive(Clone, Debug, Default)]
pub struct Group {
    selection: ExclusiveSelection<MemberId>,
    roving: RovingFocus<MemberId>,
}

impl Group {
    /// Create an empty group.
    #[must_use]
    pub fn new(wrap: WrapMode) -> Self {
        Self {
            selection: ExclusiveSelection::new(),
            roving: RovingFocus::with_wrap(wrap),
        }
    }

    /// Returns `true` if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.selection.contains(&id)
    }

    /// The selected member.
    #[must_use]
    pub fn selected(&self) -> Option<MemberId> {
        self.selection.selected()
    }

    /// The focused member, if focus is inside the group.
    #[must_use]
    pub fn active(&self) -> Option<MemberId> {
        self.roving.active()
    }

    /// The member reachable with Tab.
    #[must_use]
    pub fn tab_stop(&self) -> Option<MemberId> {
        self.roving.tab_stop()
    }

    /// `0` for the tab stop, `-1` otherwise.
    #[must_use]
    pub fn tab_index(&self, id: MemberId) -> i32 {
        self.roving.tab_index(&id)
    }

    /// Selection revision; see [`ExclusiveSelection::revision`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.selection.revision()
    }

    fn entries<M: RovingFocusable>(
        members: &MemberArena<M>,
        order: &[MemberId],
    ) -> Vec<RovingEntry<MemberId>> {
        order
            .iter()
            .filter_map(|&id| {
                let member = members.get(id)?;
                Some(RovingEntry {
                    id,
                    enabled: !member.is_disabled(),
                })
            })
            .collect()
    }

    /// Run `f` against the roving state and mark both ends of a tab stop move.
    fn track_tab_stop<M, R>(
        &mut self,
        members: &MemberArena<M>,
        order: &[MemberId],
        update: &mut Update,
        f: impl FnOnce(&mut RovingFocus<MemberId>, &RovingSpace<'_, MemberId>) -> R,
    ) -> R
    where
        M: RovingFocusable,
    {
        let entries = Self::entries(members, order);
        let space = RovingSpace { members: &entries };
        let before = self.roving.tab_stop();
        let result = f(&mut self.roving, &space);
        let after = self.roving.tab_stop();
        if before != after {
            update.mark_opt(before);
            update.mark_opt(after);
        }
        result
    }

    /// Register a member that was just attached.
    ///
    /// A member declared checked while another member is already selected
    /// has its checked flag cleared. Returns `None` for dead ids.
    pub fn register<M>(
        &mut self,
        id: MemberId,
        members: &mut MemberArena<M>,
        update: &mut Update,
    ) -> Option<Registration>
    where
        M: Selectable,
    {
        let member = members.get_mut(id)?;
        let registration = self.selection.register(id, member.is_checked());
        if registration == Registration::Demoted {
            log::debug!("{id:?} declared checked after another member; clearing it");
            member.set_checked_flag(false);
        }
        update.mark(id);
        Some(registration)
    }

    /// Deregister a member that is about to be detached.
    ///
    /// `order_before` still includes `id`. If `id` was the tab stop, the tab
    /// stop is handed to its next enabled sibling (or the previous one).
    /// Returns `true` if `id` was selected; no sibling is selected in its place.
    pub fn deregister<M>(
        &mut self,
        id: MemberId,
        members: &MemberArena<M>,
        order_before: &[MemberId],
        update: &mut Update,
    ) -> bool
    where
        M: RovingFocusable,
    {
        let was_selected = self.selection.deregister(&id);
        self.track_tab_stop(members, order_before, update, |roving, space| {
            roving.remove(&id, space);
        });
        was_selected
    }

    /// Set a member's checked flag and reconcile the rest of the group.
    ///
    /// Checking a member unchecks the previously selected one. Returns
    /// `true` if the member's flag actually changed; setting a flag to its
    /// current value does nothing.
    pub fn set_checked<M>(
        &mut self,
        id: MemberId,
        checked: bool,
        members: &mut MemberArena<M>,
        update: &mut Update,
    ) -> bool
    where
        M: Selectable,
    {
        let Some(member) = members.get_mut(id) else {
            return false;
        };
        if member.is_checked() == checked {
            return false;
        }
        member.set_checked_flag(checked);
        update.mark(id);

        if let Some(transition) = self.selection.handle_checked_change(id, checked)
            && let Some(previous) = transition.previous
            && transition.selected != Some(previous)
            && let Some(previous_member) = members.get_mut(previous)
        {
            previous_member.set_checked_flag(false);
            update.mark(previous);
        }
        true
    }

    /// Put the tab stop on `prefer` when it is an enabled member, then make
    /// sure exactly one enabled member is the tab stop.
    pub fn settle<M>(
        &mut self,
        prefer: Option<MemberId>,
        members: &MemberArena<M>,
        order: &[MemberId],
        update: &mut Update,
    ) where
        M: RovingFocusable,
    {
        self.track_tab_stop(members, order, update, |roving, space| {
            if let Some(id) = prefer {
                roving.set_tab_stop(id, space);
            }
            roving.reconcile(space);
        });
    }

    /// Record that `id` received focus. Returns `false` for disabled or unknown members.
    pub fn focus_in<M>(
        &mut self,
        id: MemberId,
        members: &MemberArena<M>,
        order: &[MemberId],
        update: &mut Update,
    ) -> bool
    where
        M: RovingFocusable,
    {
        self.track_tab_stop(members, order, update, |roving, space| {
            roving.focus_in(id, space)
        })
    }

    /// Record that focus left the group.
    pub fn focus_out(&mut self) {
        self.roving.focus_out();
    }

    /// Move focus from `from`; returns the member to focus.
    pub fn navigate<M>(
        &mut self,
        nav: Navigation,
        from: MemberId,
        members: &MemberArena<M>,
        order: &[MemberId],
        update: &mut Update,
    ) -> Option<MemberId>
    where
        M: RovingFocusable,
    {
        let target = self.track_tab_stop(members, order, update, |roving, space| {
            roving.navigate(nav, from, space)
        });
        if let Some(target) = target {
            log::trace!("focus {from:?} -> {target:?} ({nav:?})");
        }
        target
    }
}
