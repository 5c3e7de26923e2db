//! `TickQueue` — sparse per-tick event queue.
//!
//! Carriers spend most ticks on the stairs and most mail sits in the
//! generator's future.  Rather than scanning everything each tick, events are
//! filed under the tick at which they fire and the loop drains only the
//! current tick's bucket.  The driver keeps three of these: mail arrivals,
//! deliveries, and carrier returns.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! pending ticks, which stays small for any realistic building.

use std::collections::BTreeMap;

use mr_core::Tick;

/// Maps simulation ticks to the events due at that tick, in push order.
#[derive(Clone, Debug)]
pub struct TickQueue<T> {
    inner: BTreeMap<Tick, Vec<T>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<T> Default for TickQueue<T> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<T> TickQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `event` under `tick`.
    pub fn push(&mut self, tick: Tick, event: T) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return every event due at exactly `tick`.
    ///
    /// Returns `None` if nothing is due (the common case).
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<T>> {
        let events = self.inner.remove(&tick)?;
        self.total -= events.len();
        Some(events)
    }

    /// The earliest tick with at least one event, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Iterator over every pending event, earliest tick first.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &T)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&tick, events)| events.iter().map(move |e| (tick, e)))
    }

    /// Total number of pending events across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
