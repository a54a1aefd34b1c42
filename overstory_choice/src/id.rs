// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Member identifiers and the per-container arena that allocates them.

use alloc::vec::Vec;

/// Identifier for a member of a radio set or tab list.
///
/// A small, copyable handle consisting of a slot index and a generation
/// counter, allocated by the [`MemberArena`] of one container.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed and any existing `MemberId` for it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `MemberId`.
///
/// Stale ids never alias a different live member. Ids from one container are
/// meaningless in another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemberId(u32, u32);

impl MemberId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot<M> {
    generation: u32,
    member: Option<M>,
}

/// Generational storage for members.
///
/// Each container owns its own arena, so id allocation is scoped to that
/// container instance.
#[derive(Clone, Debug)]
pub struct MemberArena<M> {
    slots: Vec<Slot<M>>,
    free: Vec<u32>,
    len: usize,
}

impl<M> Default for MemberArena<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> MemberArena<M> {
    /// Create an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `member`, returning its new id.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot counts beyond u32::MAX are unsupported"
    )]
    pub fn insert(&mut self, member: M) -> MemberId {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.member = Some(member);
            return MemberId(idx, slot.generation);
        }
        let idx = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 1,
            member: Some(member),
        });
        MemberId(idx, 1)
    }

    /// Remove and return the member for `id`, if it is live.
    pub fn remove(&mut self, id: MemberId) -> Option<M> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let member = slot.member.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(member)
    }

    /// Returns `true` if `id` refers to a live member.
    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    /// Borrow the member for `id`.
    #[must_use]
    pub fn get(&self, id: MemberId) -> Option<&M> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.member.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: MemberId) -> Option<&mut M> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.member.as_mut())
    }

    /// Iterate live members in slot order.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "slot counts beyond u32::MAX are unsupported"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, &M)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            let member = slot.member.as_ref()?;
            Some((MemberId(idx as u32, slot.generation), member))
        })
    }
}
