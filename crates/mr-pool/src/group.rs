//! `GroupFormation` — carriers committed to lifting one heavy item together.
//!
//! The formation knows its members by [`CarrierId`]; carriers only carry the
//! `in_group` / `is_leader` flags and never point back at the formation.  The
//! [`Allocator`](crate::Allocator) owns at most one formation at a time, for
//! the heavy item currently at the backlog front.

use mr_core::{CarrierId, MailItem};

use crate::Fleet;

/// A (possibly incomplete) group of carriers gathered around one heavy item.
///
/// `members` is never empty: a formation is only created together with its
/// leader, and it is consumed as a whole by [`dissolve`](Self::dissolve) or
/// by the allocator on completion.
#[derive(Clone, Debug)]
pub struct GroupFormation {
    item:     MailItem,
    members:  Vec<CarrierId>,
    required: usize,
}

impl GroupFormation {
    /// Start a formation for `item` with `leader` as its first member and mark
    /// the leader on the fleet.  `required` is the member count at which the
    /// item can be lifted.
    pub fn create<F: Fleet>(leader: CarrierId, item: MailItem, required: usize, fleet: &mut F) -> Self {
        debug_assert!(required >= 2, "a group needs at least two carriers");
        fleet.mark_leader(leader);
        Self { item, members: vec![leader], required }
    }

    /// Add `carrier` unless it is already a member.  Returns `true` if added.
    pub fn add_carrier(&mut self, carrier: CarrierId) -> bool {
        if self.contains(carrier) {
            return false;
        }
        self.members.push(carrier);
        true
    }

    #[inline]
    pub fn contains(&self, carrier: CarrierId) -> bool {
        self.members.contains(&carrier)
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// `true` once enough carriers have joined to lift the item.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.members.len() >= self.required
    }

    /// The heavy item this formation targets.
    #[inline]
    pub fn item(&self) -> &MailItem {
        &self.item
    }

    #[inline]
    pub fn leader(&self) -> CarrierId {
        self.members[0]
    }

    #[inline]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Members in join order, leader first.
    pub fn members(&self) -> &[CarrierId] {
        &self.members
    }

    /// Cancel the formation because a more urgent item reached the front.
    ///
    /// Every member is released on the fleet (hand emptied, group flags
    /// cleared) so it is treated as a fresh carrier next time it is loaded.
    /// Returns the released members for re-queueing.
    pub fn dissolve<F: Fleet>(self, fleet: &mut F) -> Vec<CarrierId> {
        for &member in &self.members {
            fleet.release(member);
        }
        self.members
    }

    /// Consume a completed formation, returning its members.
    pub(crate) fn into_members(self) -> Vec<CarrierId> {
        self.members
    }
}
