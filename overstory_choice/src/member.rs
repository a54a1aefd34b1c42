// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Members (radios and tabs) and the capabilities a [`Group`](crate::Group) assembles.

use alloc::string::String;

bitflags::bitflags! {
    /// Per-member state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u8 {
        /// The member is checked (radio) or selected (tab).
        const CHECKED         = 0b0000_0001;
        /// The member ignores user activation and is skipped by keyboard navigation.
        const DISABLED        = 0b0000_0010;
        /// The member was declared checked; restored by form reset.
        const DEFAULT_CHECKED = 0b0000_0100;
    }
}

/// Accessibility role reported for a member.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `role="radio"`, state reflected as `aria-checked`.
    Radio,
    /// `role="tab"`, state reflected as `aria-selected`.
    Tab,
}

impl Role {
    /// ARIA role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Tab => "tab",
        }
    }

    /// Attribute carrying the checked/selected state for this role.
    #[must_use]
    pub const fn state_attribute(self) -> &'static str {
        match self {
            Self::Radio => "aria-checked",
            Self::Tab => "aria-selected",
        }
    }
}

/// Reflected accessibility state of one member.
///
/// Derived from the member's flags and its group's tab stop on every read,
/// so it is always in sync with the state after the last mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AriaState {
    /// Role of the member.
    pub role: Role,
    /// Checked (radio) or selected (tab).
    pub checked: bool,
    /// Whether the member is disabled.
    pub disabled: bool,
    /// `0` for the group's tab stop, `-1` otherwise.
    pub tab_index: i32,
}

impl AriaState {
    /// Value for [`Role::state_attribute`]: `"true"` or `"false"`.
    #[must_use]
    pub const fn state_value(&self) -> &'static str {
        if self.checked { "true" } else { "false" }
    }
}

/// A member that can be the one selected member of a group.
pub trait Selectable {
    /// Accessibility role.
    fn role(&self) -> Role;
    /// Whether the member is checked/selected.
    fn is_checked(&self) -> bool;
    /// Set the checked flag without any group reconciliation.
    fn set_checked_flag(&mut self, checked: bool);
    /// Value carried by change notifications.
    fn value(&self) -> &str;
}

/// A member that takes part in roving keyboard focus.
pub trait RovingFocusable {
    /// Disabled members are never the tab stop.
    fn is_disabled(&self) -> bool;
    /// Set the disabled flag.
    fn set_disabled_flag(&mut self, disabled: bool);
}

/// A member that contributes to form submission, reset, and state restore.
pub trait FormAssociated: Selectable {
    /// Group name used for submission.
    fn name(&self) -> &str;
    /// Whether the member was declared checked.
    fn default_checked(&self) -> bool;

    /// Submitted value: the member's value while checked, nothing otherwise.
    fn form_value(&self) -> Option<&str> {
        self.is_checked().then(|| self.value())
    }

    /// Serialized state for restoring after navigation: `"true"` or `"false"`.
    fn form_state(&self) -> &'static str {
        if self.is_checked() { "true" } else { "false" }
    }
}

/// Parse a serialized state produced by [`FormAssociated::form_state`].
///
/// Anything other than `"true"` restores as unchecked.
#[must_use]
pub fn parse_form_state(state: &str) -> bool {
    state == "true"
}

/// A radio button.
///
/// Radios sharing a non-empty `name` within a [`RadioSet`](crate::RadioSet)
/// form one group. A radio with an empty name is a group of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Radio {
    name: String,
    value: String,
    flags: MemberFlags,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::from("on"),
            flags: MemberFlags::empty(),
        }
    }
}

impl Radio {
    /// An unchecked, enabled, unnamed radio with the given value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set the group name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Declare the radio checked. This is also its form-reset default.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.flags
            .set(MemberFlags::CHECKED | MemberFlags::DEFAULT_CHECKED, checked);
        self
    }

    /// Declare the radio disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.flags.set(MemberFlags::DISABLED, disabled);
        self
    }

    /// Current state flags.
    #[must_use]
    pub fn flags(&self) -> MemberFlags {
        self.flags
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

impl Selectable for Radio {
    fn role(&self) -> Role {
        Role::Radio
    }

    fn is_checked(&self) -> bool {
        self.flags.contains(MemberFlags::CHECKED)
    }

    fn set_checked_flag(&mut self, checked: bool) {
        self.flags.set(MemberFlags::CHECKED, checked);
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl RovingFocusable for Radio {
    fn is_disabled(&self) -> bool {
        self.flags.contains(MemberFlags::DISABLED)
    }

    fn set_disabled_flag(&mut self, disabled: bool) {
        self.flags.set(MemberFlags::DISABLED, disabled);
    }
}

impl FormAssociated for Radio {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_checked(&self) -> bool {
        self.flags.contains(MemberFlags::DEFAULT_CHECKED)
    }
}

/// A tab in a [`Tabs`](crate::Tabs) list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tab {
    value: String,
    controls: Option<String>,
    flags: MemberFlags,
}

impl Tab {
    /// An unselected, enabled tab. `value` identifies it in change notifications.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Id of the tab panel this tab controls (`aria-controls`).
    #[must_use]
    pub fn controls(mut self, panel: impl Into<String>) -> Self {
        self.controls = Some(panel.into());
        self
    }

    /// Declare the tab selected.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.flags.set(MemberFlags::CHECKED, selected);
        self
    }

    /// Declare the tab disabled.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.flags.set(MemberFlags::DISABLED, disabled);
        self
    }

    /// The controlled panel id, if any.
    #[must_use]
    pub fn panel(&self) -> Option<&str> {
        self.controls.as_deref()
    }

    /// Current state flags.
    #[must_use]
    pub fn flags(&self) -> MemberFlags {
        self.flags
    }
}

impl Selectable for Tab {
    fn role(&self) -> Role {
        Role::Tab
    }

    fn is_checked(&self) -> bool {
        self.flags.contains(MemberFlags::CHECKED)
    }

    fn set_checked_flag(&mut self, checked: bool) {
        self.flags.set(MemberFlags::CHECKED, checked);
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl RovingFocusable for Tab {
    fn is_disabled(&self) -> bool {
        self.flags.contains(MemberFlags::DISABLED)
    }

    fn set_disabled_flag(&mut self, disabled: bool) {
        self.flags.set(MemberFlags::DISABLED, disabled);
    }
}
