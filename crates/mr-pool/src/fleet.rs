//! The carrier capability the allocator consumes, plus a ready-made store.
//!
//! # Ownership
//!
//! The allocator never owns carriers.  It only needs to load them, flag them
//! for group work, and hand them off; movement belongs to whoever drives the
//! simulation.  [`Fleet`] is that narrow seam.  [`CarrierStore`] is the
//! in-memory implementation used by `mr-sim` and the tests: one `Carrier`
//! per `CarrierId`, indexed directly by `id.index()`.

use mr_core::{CarrierId, MailItem};

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// Operations the allocator performs on carriers, addressed by id.
///
/// Implementations may panic on an out-of-range id; the allocator only uses
/// ids that the driver registered.
pub trait Fleet {
    /// `true` if the carrier holds nothing in either slot.
    fn is_unloaded(&self, carrier: CarrierId) -> bool;

    /// Put `item` in the carrier's hand slot.
    fn load_hand(&mut self, carrier: CarrierId, item: MailItem);

    /// Put `item` in the carrier's tube slot.
    fn load_tube(&mut self, carrier: CarrierId, item: MailItem);

    /// Flag the carrier as the leader of a group formation.
    fn mark_leader(&mut self, carrier: CarrierId);

    /// Flag the carrier as committed to a group formation.
    fn mark_in_group(&mut self, carrier: CarrierId);

    /// Undo everything a pending group put on the carrier: empty both slots
    /// and clear the group flags.
    fn release(&mut self, carrier: CarrierId);

    /// Irrevocably hand the loaded carrier to the movement subsystem.
    fn dispatch(&mut self, carrier: CarrierId);
}

// ── Carrier ───────────────────────────────────────────────────────────────────

/// Where a carrier is in its work cycle, from the store's point of view.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierState {
    /// In the mailroom: idle or being loaded.
    #[default]
    Mailroom,
    /// Handed off to movement; owned by the driver until it returns.
    Dispatched,
}

/// One delivery carrier.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carrier {
    pub id:        CarrierId,
    pub hand:      Option<MailItem>,
    pub tube:      Option<MailItem>,
    pub in_group:  bool,
    pub is_leader: bool,
    pub state:     CarrierState,
}

impl Carrier {
    pub fn new(id: CarrierId) -> Self {
        Self {
            id,
            hand:      None,
            tube:      None,
            in_group:  false,
            is_leader: false,
            state:     CarrierState::Mailroom,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hand.is_none() && self.tube.is_none()
    }

    /// Clear slots and flags and put the carrier back in the mailroom.
    pub fn reset(&mut self) {
        *self = Carrier::new(self.id);
    }
}

// ── CarrierStore ──────────────────────────────────────────────────────────────

/// Dense carrier storage indexed by `CarrierId`.
///
/// Dispatched ids accumulate in an outbox in dispatch order; the driver drains
/// it with [`take_dispatched`](Self::take_dispatched) after each step.
#[derive(Clone, Debug, Default)]
pub struct CarrierStore {
    carriers:   Vec<Carrier>,
    dispatched: Vec<CarrierId>,
}

impl CarrierStore {
    /// Create `count` empty carriers with ids `0..count`.
    pub fn new(count: usize) -> Self {
        let carriers = (0..count as u32).map(|i| Carrier::new(CarrierId(i))).collect();
        Self { carriers, dispatched: Vec::new() }
    }

    #[inline]
    pub fn get(&self, carrier: CarrierId) -> &Carrier {
        &self.carriers[carrier.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, carrier: CarrierId) -> &mut Carrier {
        &mut self.carriers[carrier.index()]
    }

    /// Iterator over all `CarrierId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = CarrierId> + '_ {
        (0..self.carriers.len() as u32).map(CarrierId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Carrier> + '_ {
        self.carriers.iter()
    }

    /// Drain the ids dispatched since the last call, in dispatch order.
    pub fn take_dispatched(&mut self) -> Vec<CarrierId> {
        std::mem::take(&mut self.dispatched)
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

impl Fleet for CarrierStore {
    fn is_unloaded(&self, carrier: CarrierId) -> bool {
        self.get(carrier).is_empty()
    }

    fn load_hand(&mut self, carrier: CarrierId, item: MailItem) {
        let c = self.get_mut(carrier);
        debug_assert!(c.hand.is_none(), "{carrier} already holds {:?}", c.hand);
        c.hand = Some(item);
    }

    fn load_tube(&mut self, carrier: CarrierId, item: MailItem) {
        let c = self.get_mut(carrier);
        debug_assert!(c.tube.is_none(), "{carrier} tube already holds {:?}", c.tube);
        c.tube = Some(item);
    }

    fn mark_leader(&mut self, carrier: CarrierId) {
        self.get_mut(carrier).is_leader = true;
    }

    fn mark_in_group(&mut self, carrier: CarrierId) {
        self.get_mut(carrier).in_group = true;
    }

    fn release(&mut self, carrier: CarrierId) {
        self.get_mut(carrier).reset();
    }

    fn dispatch(&mut self, carrier: CarrierId) {
        self.get_mut(carrier).state = CarrierState::Dispatched;
        self.dispatched.push(carrier);
    }
}
