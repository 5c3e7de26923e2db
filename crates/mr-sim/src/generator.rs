//! Seeded mail stream.
//!
//! The whole run's mail is drawn up front so that the allocation behaviour of
//! a run depends only on the seed and the configuration, never on how the
//! tick loop happens to interleave RNG calls.

use mr_core::{Floor, ItemId, MailItem, SimRng, Tick};

use crate::{SimConfig, TickQueue};

/// Stream offsets for the child RNGs, one per drawn attribute.
const ARRIVAL_STREAM:  u64 = 1;
const FLOOR_STREAM:    u64 = 2;
const WEIGHT_STREAM:   u64 = 3;
const PRIORITY_STREAM: u64 = 4;

/// Mail waiting to arrive, keyed by arrival tick.
#[derive(Clone, Debug, Default)]
pub struct MailGenerator {
    pending: TickQueue<MailItem>,
    created: usize,
}

impl MailGenerator {
    /// Draw `config.mail_to_create` items from `rng`.
    ///
    /// Ids are assigned in draw order starting at 0.  Items sharing an arrival
    /// tick arrive in id order.
    pub fn generate(config: &SimConfig, rng: &mut SimRng) -> Self {
        let mut arrival_rng  = rng.child(ARRIVAL_STREAM);
        let mut floor_rng    = rng.child(FLOOR_STREAM);
        let mut weight_rng   = rng.child(WEIGHT_STREAM);
        let mut priority_rng = rng.child(PRIORITY_STREAM);

        let items = (0..config.mail_to_create as u32).map(|i| {
            let arrival = Tick(arrival_rng.gen_range(0..=config.last_arrival_tick));
            let floor = Floor(floor_rng.gen_range(1..=config.floors));
            let weight = weight_rng.gen_range(config.min_weight..=config.max_weight);
            let item = MailItem::new(ItemId(i), floor, weight, arrival);

            if !priority_rng.gen_bool(config.priority_chance) {
                return item;
            }
            match priority_rng.choose(&config.priority_levels) {
                Some(&level) => item.with_priority(level),
                None => item,
            }
        });
        Self::from_items(items)
    }

    /// Wrap a hand-made mail stream; each item arrives at its `arrival` tick.
    pub fn from_items<I: IntoIterator<Item = MailItem>>(items: I) -> Self {
        let mut pending = TickQueue::new();
        let mut created = 0;
        for item in items {
            pending.push(item.arrival, item);
            created += 1;
        }
        Self { pending, created }
    }

    /// Remove and return the items arriving at `tick`.
    pub fn drain_tick(&mut self, tick: Tick) -> Vec<MailItem> {
        self.pending.drain_tick(tick).unwrap_or_default()
    }

    /// Items created over the whole run, arrived or not.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Items that have not arrived yet.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Every not-yet-arrived item, earliest first.
    pub fn pending(&self) -> impl Iterator<Item = &MailItem> + '_ {
        self.pending.iter().map(|(_, item)| item)
    }

    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}
