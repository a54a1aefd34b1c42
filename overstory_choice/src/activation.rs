// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase activation.
//!
//! A click (or Space) on a member must not commit before the embedding code
//! has had the chance to cancel the event. Activation is therefore split in
//! two:
//!
//! 1) `begin_activation` checks whether the member accepts activation at all
//!    and returns a [`PendingActivation`] token.
//! 2) The embedder dispatches the native event to its own handlers.
//! 3) `finish_activation` consumes the token together with whether any
//!    handler called `preventDefault`, and commits only if none did.
//!
//! In an event-loop target, step 3 runs in a microtask queued during step 1.

use crate::MemberId;

/// How a member was activated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    /// Pointer or keyboard activation on the member itself. The member is
    /// focused as part of the commit.
    #[default]
    Direct,
    /// Activation forwarded from elsewhere, such as a `<label>`. Focus is
    /// left alone.
    Forwarded,
}

/// An activation waiting for external handlers to run.
///
/// Not `Clone`: each activation commits at most once.
#[must_use = "pass the activation to `finish_activation` once external handlers have run"]
#[derive(Debug, PartialEq, Eq)]
pub struct PendingActivation {
    member: MemberId,
    kind: ActivationKind,
}

impl PendingActivation {
    pub(crate) fn new(member: MemberId, kind: ActivationKind) -> Self {
        Self { member, kind }
    }

    /// The activated member.
    #[must_use]
    pub fn member(&self) -> MemberId {
        self.member
    }

    /// How it was activated.
    #[must_use]
    pub fn kind(&self) -> ActivationKind {
        self.kind
    }
}
