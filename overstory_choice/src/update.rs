// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the embedder must do after a mutation: re-render, focus, notify.

use alloc::string::String;
use smallvec::SmallVec;

use crate::MemberId;

/// An outward notification, fired once per user-driven commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceEvent {
    /// The selected member changed (`change`).
    Change {
        /// Newly selected member.
        member: MemberId,
        /// Its value.
        value: String,
    },
    /// The member's value was changed by user input (`input`).
    Input {
        /// Newly selected member.
        member: MemberId,
        /// Its value.
        value: String,
    },
}

impl ChoiceEvent {
    /// The member the notification is about.
    #[must_use]
    pub fn member(&self) -> MemberId {
        match self {
            Self::Change { member, .. } | Self::Input { member, .. } => *member,
        }
    }

    /// The member's value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Change { value, .. } | Self::Input { value, .. } => value,
        }
    }

    /// Returns `true` for [`ChoiceEvent::Change`].
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Change { .. })
    }
}

/// Result of a mutating operation.
///
/// Operations never call back into the embedder. Instead they return an
/// `Update` describing what changed, which the embedder applies once the
/// mutation is complete. Handlers that react to the events by mutating the
/// same container again therefore never observe a half-applied state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Update {
    /// Members whose reflected state (checked, disabled, tab index) changed.
    pub reflect: SmallVec<[MemberId; 4]>,
    /// Member that should receive focus.
    pub focus: Option<MemberId>,
    /// Notifications to dispatch, in order.
    pub events: SmallVec<[ChoiceEvent; 2]>,
}

impl Update {
    /// Returns `true` if nothing needs to be done.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reflect.is_empty() && self.focus.is_none() && self.events.is_empty()
    }

    /// The change notifications in this update.
    pub fn changes(&self) -> impl Iterator<Item = &ChoiceEvent> {
        self.events.iter().filter(|e| e.is_change())
    }

    /// Returns `true` if `id` needs to be re-rendered.
    #[must_use]
    pub fn needs_reflect(&self, id: MemberId) -> bool {
        self.reflect.contains(&id)
    }

    pub(crate) fn mark(&mut self, id: MemberId) {
        if !self.reflect.contains(&id) {
            self.reflect.push(id);
        }
    }

    pub(crate) fn mark_opt(&mut self, id: Option<MemberId>) {
        if let Some(id) = id {
            self.mark(id);
        }
    }

    pub(crate) fn notify(&mut self, member: MemberId, value: &str, input: bool) {
        self.events.push(ChoiceEvent::Change {
            member,
            value: value.into(),
        });
        if input {
            self.events.push(ChoiceEvent::Input {
                member,
                value: value.into(),
            });
        }
    }

    pub(crate) fn merge(&mut self, other: Self) {
        for id in other.reflect {
            self.mark(id);
        }
        if other.focus.is_some() {
            self.focus = other.focus;
        }
        self.events.extend(other.events);
    }
}
