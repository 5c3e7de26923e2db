//! `Backlog` — mail waiting in the mailroom, kept in delivery order.
//!
//! # Ordering
//!
//! Front to back the backlog is sorted by
//!
//! ```text
//! (priority desc, destination floor desc)
//! ```
//!
//! and items equal on both keys keep their arrival order.  Insertion places
//! the new item *after* every item whose key is greater than or equal to its
//! own, which is exactly what a stable sort of `existing ++ [new]` would give.
//!
//! Insertion is O(log n) search + O(n) shift.  Pools are small (tens to low
//! hundreds of items) so a contiguous deque beats any linked structure here.

use std::collections::VecDeque;

use mr_core::{Floor, ItemId, MailItem, Priority};

/// Priority-ordered queue of undelivered mail.
#[derive(Clone, Debug, Default)]
pub struct Backlog {
    items: VecDeque<MailItem>,
}

#[inline]
fn sort_key(item: &MailItem) -> (Priority, Floor) {
    (item.priority(), item.destination)
}

impl Backlog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` at its ordered position.
    ///
    /// The backlog never holds the same item twice; inserting an id that is
    /// already queued is a caller bug.
    pub fn insert(&mut self, item: MailItem) {
        debug_assert!(!self.contains(item.id), "{} is already in the backlog", item.id);
        let key = sort_key(&item);
        let at = self.items.partition_point(|queued| sort_key(queued) >= key);
        self.items.insert(at, item);
    }

    /// The most urgent item, if any.
    #[inline]
    pub fn front(&self) -> Option<&MailItem> {
        self.items.front()
    }

    pub fn pop_front(&mut self) -> Option<MailItem> {
        self.items.pop_front()
    }

    /// Remove the item at `index` (as returned by [`position`](Self::position)).
    pub fn remove_at(&mut self, index: usize) -> Option<MailItem> {
        self.items.remove(index)
    }

    /// Index of the first item, scanning from the front, that satisfies `pred`.
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&MailItem) -> bool,
    {
        self.items.iter().position(pred)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|queued| queued.id == id)
    }

    /// Front-to-back iterator.
    pub fn iter(&self) -> impl Iterator<Item = &MailItem> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
