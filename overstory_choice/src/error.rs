// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the `try_*` operations.

use core::fmt;

use crate::MemberId;

/// Error returned by the `try_*` variants of container operations.
///
/// The plain variants treat these cases as no-ops.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    /// The id does not refer to a live member of this container.
    UnknownMember(MemberId),
    /// The index is past the end of the member list.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of members.
        len: usize,
    },
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMember(id) => write!(f, "{id:?} is not a live member"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for {len} members")
            }
        }
    }
}

impl core::error::Error for ChoiceError {}
