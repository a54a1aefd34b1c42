// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_choice --heading-base-level=0

//! Overstory Choice: headless radio groups and tab lists.
//!
//! This crate combines the exclusive selection of `understory_choice` with
//! the roving tab stop of `understory_roving` and wraps them in two
//! containers:
//!
//! - [`RadioSet`]: radios grouped by name, with form value, reset, and
//!   state restore support.
//! - [`Tabs`]: a single tab list with automatic or manual activation and an
//!   optional panel per tab.
//!
//! Both are headless. They own member state (checked, disabled, value) and
//! compute what the host must do: which members to re-render, where to move
//! focus, and which change/input notifications to deliver. Every mutating
//! operation returns an [`Update`] instead of calling back into the host,
//! so handlers may freely call back into the container afterwards.
//!
//! ## Activation
//!
//! Clicks are split in two phases so external handlers can cancel them:
//! [`RadioSet::begin_activation`] hands out a [`PendingActivation`], the host
//! runs its own handlers, then [`RadioSet::finish_activation`] commits the
//! click unless the default was prevented.
//!
//! ```rust
//! use overstory_choice::{ActivationKind, Radio, RadioSet};
//!
//! let mut radios = RadioSet::new();
//! let (a, _) = radios.insert(Radio::new("s").named("size"));
//! let (b, _) = radios.insert(Radio::new("m").named("size"));
//!
//! let pending = radios.begin_activation(b, ActivationKind::Direct).unwrap();
//! let update = radios.finish_activation(pending, false);
//! assert_eq!(update.focus, Some(b));
//! assert_eq!(update.changes().count(), 1);
//! assert!(radios.is_checked(b));
//! assert_eq!(radios.tab_index(a), -1);
//!
//! // A cancelled click changes nothing.
//! let pending = radios.begin_activation(a, ActivationKind::Direct).unwrap();
//! assert!(radios.finish_activation(pending, true).is_empty());
//! assert!(radios.is_checked(b));
//! ```
//!
//! Custom one-of-many widgets can use [`Group`] directly with their own
//! member type by implementing [`Selectable`] and [`RovingFocusable`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod activation;
mod error;
mod group;
mod id;
mod keys;
mod member;
mod radio;
mod tabs;
mod update;

pub use activation::{ActivationKind, PendingActivation};
pub use error::ChoiceError;
pub use group::Group;
pub use id::{MemberArena, MemberId};
pub use keys::TextDirection;
pub use member::{
    AriaState, FormAssociated, MemberFlags, Radio, Role, RovingFocusable, Selectable, Tab,
    parse_form_state,
};
pub use radio::{KeyOutcome, RadioSet};
pub use tabs::{NavState, Tabs, TabsOptions};
pub use update::{ChoiceEvent, Update};

pub use understory_choice::Registration;
pub use understory_roving::{Navigation, WrapMode};
