// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab lists with automatic or manual activation.

use alloc::vec::Vec;

use ui_events::keyboard::{Key, KeyboardEvent};
use understory_roving::WrapMode;

use crate::keys::{KeyIntent, tabs_intent};
use crate::{
    ActivationKind, AriaState, ChoiceError, Group, MemberArena, MemberId, PendingActivation,
    RovingFocusable, Selectable, Tab, TextDirection, Update,
};

/// Configuration for [`Tabs`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TabsOptions {
    /// Select tabs as soon as keyboard focus reaches them.
    pub auto_activate: bool,
    /// Direction used for ArrowLeft/ArrowRight.
    pub direction: TextDirection,
    /// Behavior at the ends of the list.
    pub wrap: WrapMode,
}

/// Keyboard navigation state of a tab list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    /// Focus (if any) is on the selected tab.
    #[default]
    Idle,
    /// Manual mode only: focus moved to `focused` without selecting it yet.
    Navigating {
        /// The focused, not yet selected tab.
        focused: MemberId,
    },
}

/// A tab list: one selected tab, one tab stop, arrow-key navigation.
///
/// In manual mode (the default) arrow keys, Home, and End only move focus,
/// and Enter, Space, or a click commits the focused tab. With
/// [`TabsOptions::auto_activate`] every focus move commits immediately.
///
/// ## Example
///
/// ```rust
/// use overstory_choice::{NavState, Tab, Tabs, TabsOptions};
/// use ui_events::keyboard::{Key, NamedKey};
///
/// let mut tabs = Tabs::new(TabsOptions::default());
/// let (one, _) = tabs.push(Tab::new("one").selected(true));
/// let (two, _) = tabs.push(Tab::new("two"));
/// tabs.focus_in(one);
///
/// let update = tabs.key_down(&Key::Named(NamedKey::ArrowRight));
/// assert_eq!(update.focus, Some(two));
/// assert_eq!(update.changes().count(), 0);
/// assert_eq!(tabs.nav_state(), NavState::Navigating { focused: two });
///
/// let update = tabs.key_down(&Key::Named(NamedKey::Enter));
/// assert_eq!(update.changes().count(), 1);
/// assert_eq!(tabs.active_tab_index(), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct Tabs {
    members: MemberArena<Tab>,
    order: Vec<MemberId>,
    group: Group,
    options: TabsOptions,
    nav: NavState,
}

impl Tabs {
    /// Create an empty tab list.
    #[must_use]
    pub fn new(options: TabsOptions) -> Self {
        Self {
            members: MemberArena::new(),
            order: Vec::new(),
            group: Group::new(options.wrap),
            options,
            nav: NavState::Idle,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> TabsOptions {
        self.options
    }

    /// Whether focus moves select tabs immediately.
    #[must_use]
    pub fn auto_activate(&self) -> bool {
        self.options.auto_activate
    }

    /// Switch between automatic and manual activation.
    ///
    /// Pending manual navigation is abandoned.
    pub fn set_auto_activate(&mut self, auto_activate: bool) -> Update {
        self.options.auto_activate = auto_activate;
        let mut update = Update::default();
        self.nav = NavState::Idle;
        self.settle(&mut update);
        update
    }

    /// Change the arrow key direction.
    pub fn set_direction(&mut self, direction: TextDirection) {
        self.options.direction = direction;
    }

    /// Keyboard navigation state.
    #[must_use]
    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    /// Tabs in order.
    #[must_use]
    pub fn tabs(&self) -> &[MemberId] {
        &self.order
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Borrow a tab.
    #[must_use]
    pub fn tab(&self, id: MemberId) -> Option<&Tab> {
        self.members.get(id)
    }

    /// The selected tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<MemberId> {
        self.group.selected()
    }

    /// Position of the selected tab, or `None` when nothing is selected.
    #[must_use]
    pub fn active_tab_index(&self) -> Option<usize> {
        let active = self.group.selected()?;
        self.order.iter().position(|&id| id == active)
    }

    /// The tab holding keyboard focus, if focus is inside the list.
    #[must_use]
    pub fn focused_tab(&self) -> Option<MemberId> {
        self.group.active()
    }

    /// Panel id controlled by the selected tab.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.members.get(self.group.selected()?)?.panel()
    }

    /// Returns `true` if `id` is the selected tab.
    #[must_use]
    pub fn is_selected(&self, id: MemberId) -> bool {
        self.members.get(id).is_some_and(Tab::is_checked)
    }

    /// `0` for the tab stop, `-1` otherwise.
    #[must_use]
    pub fn tab_index(&self, id: MemberId) -> i32 {
        self.group.tab_index(id)
    }

    /// The reflected accessibility state of `id`.
    #[must_use]
    pub fn aria(&self, id: MemberId) -> Option<AriaState> {
        let tab = self.members.get(id)?;
        Some(AriaState {
            role: tab.role(),
            checked: tab.is_checked(),
            disabled: tab.is_disabled(),
            tab_index: self.group.tab_index(id),
        })
    }

    /// Keep the tab stop on the focused tab while navigating, otherwise on
    /// the selected tab.
    fn settle(&mut self, update: &mut Update) {
        if let NavState::Navigating { focused } = self.nav
            && self.members.get(focused).is_none_or(Tab::is_disabled)
        {
            self.nav = NavState::Idle;
        }
        let prefer = match self.nav {
            NavState::Navigating { focused } => Some(focused),
            NavState::Idle => self.group.selected(),
        };
        self.group
            .settle(prefer, &self.members, &self.order, update);
    }

    /// Select `id`, notifying if the selection changed.
    fn commit(&mut self, id: MemberId, update: &mut Update) {
        self.nav = NavState::Idle;
        if self.group.set_checked(id, true, &mut self.members, update)
            && let Some(tab) = self.members.get(id)
        {
            log::debug!("tab {id:?} activated");
            update.notify(id, tab.value(), false);
        }
        self.settle(update);
    }

    /// Append a tab.
    pub fn push(&mut self, tab: Tab) -> (MemberId, Update) {
        self.insert(self.order.len(), tab)
    }

    /// Insert a tab at `index` (clamped to the end).
    ///
    /// A tab declared selected while another is already selected is
    /// deselected.
    pub fn insert(&mut self, index: usize, tab: Tab) -> (MemberId, Update) {
        let id = self.members.insert(tab);
        self.order.insert(index.min(self.order.len()), id);
        let mut update = Update::default();
        self.group.register(id, &mut self.members, &mut update);
        self.settle(&mut update);
        (id, update)
    }

    /// Remove a tab.
    ///
    /// Removing the selected tab leaves the list with no selection.
    pub fn remove(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        if !self.members.contains(id) {
            return update;
        }
        self.group
            .deregister(id, &self.members, &self.order, &mut update);
        self.order.retain(|&o| o != id);
        self.members.remove(id);
        if self.nav == (NavState::Navigating { focused: id }) {
            self.nav = NavState::Idle;
        }
        update.reflect.retain(|o| *o != id);
        self.settle(&mut update);
        update
    }

    /// Move a tab to `index` (clamped to the end). Returns `false` for unknown ids.
    pub fn move_to(&mut self, id: MemberId, index: usize) -> bool {
        let Some(pos) = self.order.iter().position(|&o| o == id) else {
            return false;
        };
        self.order.remove(pos);
        self.order.insert(index.min(self.order.len()), id);
        true
    }

    /// Select a tab programmatically. No notification is emitted.
    pub fn set_active_tab(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        if !self.members.contains(id) {
            return update;
        }
        self.nav = NavState::Idle;
        self.group.set_checked(id, true, &mut self.members, &mut update);
        self.settle(&mut update);
        update
    }

    /// Select the tab at `index` programmatically; out of range is a no-op.
    pub fn set_active_tab_index(&mut self, index: usize) -> Update {
        match self.order.get(index) {
            Some(&id) => self.set_active_tab(id),
            None => Update::default(),
        }
    }

    /// Like [`Tabs::set_active_tab_index`], but reports out-of-range indices.
    pub fn try_set_active_tab_index(&mut self, index: usize) -> Result<Update, ChoiceError> {
        if index >= self.order.len() {
            return Err(ChoiceError::IndexOutOfRange {
                index,
                len: self.order.len(),
            });
        }
        Ok(self.set_active_tab_index(index))
    }

    /// Enable or disable a tab.
    pub fn set_disabled(&mut self, id: MemberId, disabled: bool) -> Update {
        let mut update = Update::default();
        let Some(tab) = self.members.get_mut(id) else {
            return update;
        };
        if tab.is_disabled() == disabled {
            return update;
        }
        tab.set_disabled_flag(disabled);
        update.mark(id);
        self.settle(&mut update);
        update
    }

    /// Handle a key press inside the tab list.
    ///
    /// Navigation starts from the focused tab, or the tab stop when focus is
    /// elsewhere. Lists with fewer than two tabs ignore navigation keys.
    pub fn key_down(&mut self, key: &Key) -> Update {
        let mut update = Update::default();
        let Some(intent) = tabs_intent(key, self.options.direction) else {
            return update;
        };
        let Some(from) = self.group.active().or(self.group.tab_stop()) else {
            return update;
        };
        match intent {
            KeyIntent::Commit => {
                if self.members.get(from).is_some_and(|t| !t.is_disabled()) {
                    self.commit(from, &mut update);
                }
            }
            KeyIntent::Navigate(nav) => {
                if self.order.len() < 2 {
                    return update;
                }
                let Some(target) =
                    self.group
                        .navigate(nav, from, &self.members, &self.order, &mut update)
                else {
                    return update;
                };
                update.focus = Some(target);
                if self.options.auto_activate {
                    self.commit(target, &mut update);
                } else if self.group.selected() == Some(target) {
                    self.nav = NavState::Idle;
                } else {
                    self.nav = NavState::Navigating { focused: target };
                }
            }
        }
        update
    }

    /// Handle a keyboard event; key releases are ignored.
    pub fn keyboard_event(&mut self, event: &KeyboardEvent) -> Update {
        if !event.state.is_down() {
            return Update::default();
        }
        self.key_down(&event.key)
    }

    /// First phase of a click on a tab.
    ///
    /// Returns `None` for unknown or disabled tabs, and for the tab that is
    /// already selected.
    pub fn begin_activation(
        &self,
        id: MemberId,
        kind: ActivationKind,
    ) -> Option<PendingActivation> {
        let tab = self.members.get(id)?;
        if tab.is_disabled() || tab.is_checked() {
            return None;
        }
        Some(PendingActivation::new(id, kind))
    }

    /// Second phase of a click: commit unless `default_prevented`.
    pub fn finish_activation(
        &mut self,
        pending: PendingActivation,
        default_prevented: bool,
    ) -> Update {
        let mut update = Update::default();
        let id = pending.member();
        if default_prevented {
            log::debug!("activation of tab {id:?} cancelled by the embedder");
            return update;
        }
        if !self.members.get(id).is_some_and(|t| !t.is_disabled()) {
            return update;
        }
        if pending.kind() == ActivationKind::Direct
            && self
                .group
                .focus_in(id, &self.members, &self.order, &mut update)
        {
            update.focus = Some(id);
        }
        self.commit(id, &mut update);
        update
    }

    /// Both phases of a direct click with no external handlers.
    pub fn activate(&mut self, id: MemberId) -> Update {
        match self.begin_activation(id, ActivationKind::Direct) {
            Some(pending) => self.finish_activation(pending, false),
            None => Update::default(),
        }
    }

    /// Record that tab `id` received focus.
    ///
    /// The focused tab becomes the tab stop. With automatic activation it is
    /// also selected.
    pub fn focus_in(&mut self, id: MemberId) -> Update {
        let mut update = Update::default();
        if !self
            .group
            .focus_in(id, &self.members, &self.order, &mut update)
        {
            return update;
        }
        if self.options.auto_activate {
            self.commit(id, &mut update);
            return update;
        }
        self.nav = if self.group.selected() == Some(id) {
            NavState::Idle
        } else {
            NavState::Navigating { focused: id }
        };
        self.settle(&mut update);
        update
    }

    /// Record that focus left the tab list.
    ///
    /// Uncommitted navigation is reverted: the selected tab becomes the tab
    /// stop again and nothing is selected.
    pub fn focus_out(&mut self) -> Update {
        let mut update = Update::default();
        self.group.focus_out();
        self.nav = NavState::Idle;
        self.settle(&mut update);
        update
    }
}
