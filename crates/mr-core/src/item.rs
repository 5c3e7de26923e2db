//! The mail item record handed around by the pool and the driver.

use std::fmt;

use crate::{Floor, ItemId, Tick};

// ── Priority ──────────────────────────────────────────────────────────────────

/// Delivery urgency.  Higher values are more urgent; `1` is the lowest
/// level, shared by ordinary mail and the least urgent priority mail.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority(pub u32);

impl Priority {
    /// Level assumed for items that carry no explicit priority.  It is the
    /// lowest level in use, so any priority item outranks ordinary mail.
    pub const DEFAULT: Priority = Priority(1);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

// ── MailItem ──────────────────────────────────────────────────────────────────

/// One piece of mail waiting for (or out on) delivery.
///
/// Immutable once created; cheap to copy.  A carrier group all hold copies of
/// the same item in their hand slots, so identity lives in [`ItemId`] rather
/// than in the value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MailItem {
    pub id:          ItemId,
    pub destination: Floor,
    /// Weight in grams.
    pub weight:      u32,
    /// Tick at which the item reached the mailroom.
    pub arrival:     Tick,
    /// Explicit priority level; `None` for ordinary mail.
    pub priority:    Option<Priority>,
}

impl MailItem {
    /// Ordinary (non-priority) mail.
    pub fn new(id: ItemId, destination: Floor, weight: u32, arrival: Tick) -> Self {
        Self { id, destination, weight, arrival, priority: None }
    }

    /// Builder-style: attach an explicit priority level (`>= 1`).
    pub fn with_priority(mut self, level: u32) -> Self {
        debug_assert!(level >= Priority::DEFAULT.0, "priority level {level} is below {}", Priority::DEFAULT);
        self.priority = Some(Priority(level));
        self
    }

    /// Effective priority, falling back to [`Priority::DEFAULT`].
    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    #[inline]
    pub fn is_priority(&self) -> bool {
        self.priority.is_some()
    }

    /// Identity comparison.
    #[inline]
    pub fn same_item(&self, other: &MailItem) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for MailItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> floor {} ({} g, {})",
            self.id,
            self.destination.0,
            self.weight,
            self.priority()
        )
    }
}
