// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio buttons grouped by name.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use ui_events::keyboard::{Key, KeyboardEvent};
use understory_roving::WrapMode;

use crate::keys::{KeyIntent, radio_intent};
use crate::member::parse_form_state;
use crate::{
    ActivationKind, AriaState, ChoiceError, FormAssociated, Group, MemberArena, MemberId,
    PendingActivation, Radio, RovingFocusable, Selectable, TextDirection, Update,
};

/// Which group a radio belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum GroupKey {
    Named(String),
    /// Unnamed radios are alone in their group.
    Solo(MemberId),
}

impl GroupKey {
    fn of(id: MemberId, radio: &Radio) -> Self {
        if radio.name().is_empty() {
            Self::Solo(id)
        } else {
            Self::Named(radio.name().into())
        }
    }

    fn matches(&self, id: MemberId, radio: &Radio) -> bool {
        match self {
            Self::Named(name) => radio.name() == name,
            Self::Solo(solo) => *solo == id && radio.name().is_empty(),
        }
    }
}

/// Result of [`RadioSet::key_down`].
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key has no meaning for radios; let it through.
    Ignored,
    /// The key was consumed (prevent its default action) with this update.
    Handled(Update),
    /// Space began an activation; finish it once external handlers have run.
    Pending(PendingActivation),
}

/// All radios of one form (or document root), grouped by name.
///
/// Radios are kept in document order. Each distinct non-empty name forms one
/// [`Group`]: at most one radio per name is checked, and exactly one enabled
/// radio per name is reachable with Tab (the checked one when there is one).
///
/// ## Example
///
/// ```rust
/// use overstory_choice::{ChoiceEvent, Radio, RadioSet};
///
/// let mut set = RadioSet::new();
/// let (small, _) = set.insert(Radio::new("small").named("size"));
/// let (large, _) = set.insert(Radio::new("large").named("size").checked(true));
///
/// let update = set.activate(small);
/// assert!(set.is_checked(small));
/// assert!(!set.is_checked(large));
/// assert_eq!(update.changes().count(), 1);
/// assert_eq!(update.focus, Some(small));
/// assert_eq!(set.tab_index(small), 0);
/// ```
#[derive(Debug, Default)]
pub struct RadioSet {
    members: MemberArena<Radio>,
    order: Vec<MemberId>,
    groups: HashMap<GroupKey, Group>,
    direction: TextDirection,
}

impl RadioSet {
    /// Create an empty set with left-to-right arrow handling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with the given arrow direction.
    #[must_use]
    pub fn with_direction(direction: TextDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Arrow key direction.
    #[must_use]
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Change the arrow key direction.
    pub fn set_direction(&mut self, direction: TextDirection) {
        self.direction = direction;
    }

    /// Number of radios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the set holds no radios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All radios in document order.
    #[must_use]
    pub fn radios(&self) -> &[MemberId] {
        &self.order
    }

    /// Borrow a radio.
    #[must_use]
    pub fn radio(&self, id: MemberId) -> Option<&Radio> {
        self.members.get(id)
    }

    /// Returns `true` if `id` is checked. Unknown ids are unchecked.
    #[must_use]
    pub fn is_checked(&self, id: MemberId) -> bool {
        self.members.get(id).is_some_and(Radio::is_checked)
    }

    /// The checked radio among those named `name`.
    #[must_use]
    pub fn selected(&self, name: &str) -> Option<MemberId> {
        if name.is_empty() {
            return None;
        }
        self.groups
            .get(&GroupKey::Named(name.into()))
            .and_then(Group::selected)
    }

    /// The radios sharing `id`'s group, in document order.
    #[must_use]
    pub fn group_of(&self, id: MemberId) -> Vec<MemberId> {
        match self.members.get(id) {
            Some(radio) => self.group_order(&GroupKey::of(id, radio)),
            None => Vec::new(),
        }
    }

    /// `0` for its group's tab stop, `-1` otherwise (and for unknown ids).
    #[must_use]
    pub fn tab_index(&self, id: MemberId) -> i32 {
        self.group(id).map_or(-1, |(_, group)| group.tab_index(id))
    }

    /// The reflected accessibility state of `id`.
    #[must_use]
    pub fn aria(&self, id: MemberId) -> Option<AriaState> {
        let radio = self.members.get(id)?;
        Some(AriaState {
            role: radio.role(),
            checked: radio.is_checked(),
            disabled: radio.is_disabled(),
            tab_index: self.tab_index(id),
        })
    }

    /// The radio that holds focus within `id`'s group.
    #[must_use]
    pub fn focused(&self, id: MemberId) -> Option<MemberId> {
        self.group(id).and_then(|(_, group)| group.active())
    }

    fn group(&self, id: MemberId) -> Option<(GroupKey, &Group)> {
        let key = GroupKey::of(id, self.members.get(id)?);
        let group = self.groups.get(&key)?;
        Some((key, group))
    }

    fn group_order(&self, key: &GroupKey) -> Vec<MemberId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.members.get(id).is_some_and(|r| key.matches(id, r)))
            .collect()
    }

    /// Put the tab stop on the focused radio while focus is inside the
    /// group, otherwise on the checked radio, or keep a valid one.
    fn settle(&mut self, key: &GroupKey, update: &mut Update) {
        let order = self.group_order(key);
        if let Some(group) = self.groups.get_mut(key) {
            let prefer = group.active().or(group.selected());
            group.settle(prefer, &self.members, &order, update);
        }
    }

    fn attach(&mut self, id: MemberId, update: &mut Update) {
        let Some(radio) = self.members.get(id) else {
            return;
        };
        let key = GroupKey::of(id, radio);
        let group = self
            .groups
            .entry(key.clone())
            .or_insert_with(|| Group::new(WrapMode::Wrap));
        group.register(id, &mut self.members, update);
        self.settle(&key, update);
    }

    fn detach(&mut self, id: MemberId, update: &mut Update) {
        let Some((key, _)) = self.group(id) else {
            return;
        };
        let order = self.group_order(&key);
        let Some(group) = self.groups.get_mut(&key) else {
            return;
        };
        group.deregister(id, &self.members, &order, update);
        if group.is_empty() {
            self.groups.remove(&key);
        } else {
            let remaining: Vec<_> = order.into_iter().filter(|&o| o != id).collect();
            let prefer = group.active().filter(|&a| a != id).or(group.selected());
            group.settle(prefer, &self.members, &remaining, update);
        }
    }

    /// Append a radio in document order.
    pub fn insert(&mut self, radio: Radio) -> (MemberId, Update) {
        self.insert_at(self.order.len(), radio)
    }

    /// Insert a radio at `index` in document order (clamped to the end).
    ///
    /// If the radio is declared checked but its group already has a checked
    /// radio, the new one is unchecked.
    pub fn insert_at(&mut self, index: usize, radio: Radio) -> (MemberId, Update) {
        let id = self.members.insert(radio);
        self.order.insert(index.min(self.order.len()), id);
        let mut update = Update::default();
        self.attach(id, &mut update);
        (id, update)
    }

    /// Remove a radio.
    ///
    /// Removing the checked radio leaves its group with nothing checked.
    pub fn remove(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        if !self.members.contains(id) {
            return update;
        }
        self.detach(id, &mut update);
        self.order.retain(|&o| o != id);
        self.members.remove(id);
        update.reflect.retain(|o| *o != id);
        update
    }

    /// Move a radio to `index` in document order (clamped to the end).
    ///
    /// Returns `false` for unknown ids.
    pub fn move_to(&mut self, id: MemberId, index: usize) -> bool {
        let Some(pos) = self.order.iter().position(|&o| o == id) else {
            return false;
        };
        self.order.remove(pos);
        self.order.insert(index.min(self.order.len()), id);
        true
    }

    /// Set a radio's checked state programmatically.
    ///
    /// Allowed on disabled radios. No notifications are emitted.
    pub fn set_checked(&mut self, id: MemberId, checked: bool) -> Update {
        let mut update = Update::default();
        let Some((key, _)) = self.group(id) else {
            return update;
        };
        if let Some(group) = self.groups.get_mut(&key)
            && group.set_checked(id, checked, &mut self.members, &mut update)
        {
            self.settle(&key, &mut update);
        }
        update
    }

    /// Like [`RadioSet::set_checked`], but reports unknown ids.
    pub fn try_set_checked(&mut self, id: MemberId, checked: bool) -> Result<Update, ChoiceError> {
        if !self.members.contains(id) {
            return Err(ChoiceError::UnknownMember(id));
        }
        Ok(self.set_checked(id, checked))
    }

    /// Enable or disable a radio.
    pub fn set_disabled(&mut self, id: MemberId, disabled: bool) -> Update {
        let mut update = Update::default();
        let Some(radio) = self.members.get_mut(id) else {
            return update;
        };
        if radio.is_disabled() == disabled {
            return update;
        }
        radio.set_disabled_flag(disabled);
        update.mark(id);
        if let Some((key, _)) = self.group(id) {
            self.settle(&key, &mut update);
        }
        update
    }

    /// Change a radio's value.
    pub fn set_value(&mut self, id: MemberId, value: impl Into<String>) {
        if let Some(radio) = self.members.get_mut(id) {
            radio.set_value(value.into());
        }
    }

    /// Rename a radio, moving it to another group.
    ///
    /// A checked radio joining a group that already has a checked radio is
    /// unchecked.
    pub fn set_name(&mut self, id: MemberId, name: impl Into<String>) -> Update {
        let mut update = Update::default();
        let name = name.into();
        match self.members.get(id) {
            Some(radio) if radio.name() != name => {}
            _ => return update,
        }
        self.detach(id, &mut update);
        if let Some(radio) = self.members.get_mut(id) {
            log::debug!("{id:?} moves from group {:?} to {name:?}", radio.name());
            radio.set_name(name);
        }
        self.attach(id, &mut update);
        update
    }

    /// First phase of a click: returns `None` if the radio swallows it.
    ///
    /// Disabled radios swallow activation entirely.
    pub fn begin_activation(
        &self,
        id: MemberId,
        kind: ActivationKind,
    ) -> Option<PendingActivation> {
        let radio = self.members.get(id)?;
        if radio.is_disabled() {
            log::trace!("{id:?} is disabled; activation swallowed");
            return None;
        }
        Some(PendingActivation::new(id, kind))
    }

    /// Second phase of a click.
    ///
    /// Unless `default_prevented`, the radio becomes checked; clicking a
    /// checked radio keeps it checked. `Change` and `Input` notifications are
    /// emitted only if the checked state actually changed.
    pub fn finish_activation(
        &mut self,
        pending: PendingActivation,
        default_prevented: bool,
    ) -> Update {
        let mut update = Update::default();
        let id = pending.member();
        if default_prevented {
            log::debug!("activation of {id:?} cancelled by the embedder");
            return update;
        }
        let Some(radio) = self.members.get(id) else {
            return update;
        };
        if radio.is_disabled() {
            return update;
        }
        let Some((key, _)) = self.group(id) else {
            return update;
        };
        let order = self.group_order(&key);
        let Some(group) = self.groups.get_mut(&key) else {
            return update;
        };
        if pending.kind() == ActivationKind::Direct
            && group.focus_in(id, &self.members, &order, &mut update)
        {
            update.focus = Some(id);
        }
        if group.set_checked(id, true, &mut self.members, &mut update) {
            self.commit_notify(id, &mut update);
        }
        self.settle(&key, &mut update);
        update
    }

    /// Both phases of a direct click with no external handlers.
    pub fn activate(&mut self, id: MemberId) -> Update {
        match self.begin_activation(id, ActivationKind::Direct) {
            Some(pending) => self.finish_activation(pending, false),
            None => Update::default(),
        }
    }

    fn commit_notify(&self, id: MemberId, update: &mut Update) {
        if let Some(radio) = self.members.get(id) {
            log::debug!("{id:?} checked in group {:?}", radio.name());
            update.notify(id, radio.value(), true);
        }
    }

    /// Handle a key press on radio `id`.
    ///
    /// Arrow keys move focus to the next or previous enabled radio of the
    /// group (wrapping, Left/Right flipped in right-to-left layouts) and
    /// check it. Space begins an activation like a click.
    pub fn key_down(&mut self, id: MemberId, key: &Key) -> KeyOutcome {
        let Some((group_key, _)) = self.group(id) else {
            return KeyOutcome::Ignored;
        };
        let nav = match radio_intent(key, self.direction) {
            Some(KeyIntent::Navigate(nav)) => nav,
            Some(KeyIntent::Commit) => {
                return match self.begin_activation(id, ActivationKind::Direct) {
                    Some(pending) => KeyOutcome::Pending(pending),
                    None => KeyOutcome::Ignored,
                };
            }
            None => return KeyOutcome::Ignored,
        };

        let mut update = Update::default();
        let order = self.group_order(&group_key);
        let Some(group) = self.groups.get_mut(&group_key) else {
            return KeyOutcome::Ignored;
        };
        if let Some(target) = group.navigate(nav, id, &self.members, &order, &mut update) {
            update.focus = Some(target);
            if group.set_checked(target, true, &mut self.members, &mut update) {
                self.commit_notify(target, &mut update);
            }
            self.settle(&group_key, &mut update);
        }
        KeyOutcome::Handled(update)
    }

    /// Handle a keyboard event on radio `id`; key releases are ignored.
    pub fn keyboard_event(&mut self, id: MemberId, event: &KeyboardEvent) -> KeyOutcome {
        if !event.state.is_down() {
            return KeyOutcome::Ignored;
        }
        self.key_down(id, &event.key)
    }

    /// Record that radio `id` received focus.
    ///
    /// The focused radio is the tab stop until focus leaves the group.
    pub fn focus_in(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        let Some((key, _)) = self.group(id) else {
            return update;
        };
        let order = self.group_order(&key);
        if let Some(group) = self.groups.get_mut(&key)
            && !group.focus_in(id, &self.members, &order, &mut update)
        {
            self.settle(&key, &mut update);
        }
        update
    }

    /// Record that focus left radio `id`'s group.
    ///
    /// The checked radio, if any, becomes the tab stop again.
    pub fn focus_out(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        let Some((key, _)) = self.group(id) else {
            return update;
        };
        if let Some(group) = self.groups.get_mut(&key) {
            group.focus_out();
        }
        self.settle(&key, &mut update);
        update
    }

    /// Submitted value of `id`: its value while checked.
    #[must_use]
    pub fn form_value(&self, id: MemberId) -> Option<&str> {
        self.members.get(id)?.form_value()
    }

    /// Serialized state of `id` for later [`RadioSet::restore_state`].
    #[must_use]
    pub fn form_state(&self, id: MemberId) -> Option<&'static str> {
        Some(self.members.get(id)?.form_state())
    }

    /// Revert every radio to its declared default, in document order.
    pub fn form_reset(&mut self) -> Update {
        let mut update = Update::default();
        for id in self.order.clone() {
            if let Some(radio) = self.members.get(id) {
                let default = radio.default_checked();
                update.merge(self.set_checked(id, default));
            }
        }
        update
    }

    /// Restore `id` from a state produced by [`RadioSet::form_state`].
    pub fn restore_state(&mut self, id: MemberId, state: &str) -> Update {
        self.set_checked(id, parse_form_state(state))
    }
}
