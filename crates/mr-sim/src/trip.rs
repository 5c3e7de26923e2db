//! Trip planning for dispatched carriers.
//!
//! ```text
//! mailroom ──(hand floor × pace)──▶ hand floor ──(|tube − hand|)──▶ tube floor ──(floor)──▶ mailroom
//! ```
//!
//! `pace` is 1 tick per floor alone and `group_ticks_per_floor` while a group
//! shares the heavy item.  Only the hand leg runs at group pace.

use mr_core::{CarrierId, Floor, MailItem, Tick};
use mr_pool::Dispatch;

/// One item reaching its floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Delivery {
    pub item:    MailItem,
    pub carrier: CarrierId,
    pub tick:    Tick,
}

impl Delivery {
    /// Ticks between the item's arrival in the mailroom and its delivery.
    #[inline]
    pub fn wait_ticks(&self) -> u64 {
        self.tick.since(self.item.arrival)
    }

    /// Delivery cost: `wait^penalty × (1 + √level)`, where `level` is the
    /// explicit priority and ordinary mail adds no weight (level 0).  This is
    /// a scoring weight only; the backlog orders ordinary mail at
    /// [`Priority::DEFAULT`][mr_core::Priority::DEFAULT].  Lower totals are better.
    pub fn score(&self, penalty: f64) -> f64 {
        let priority = self.item.priority.map_or(0, |p| p.0) as f64;
        (self.wait_ticks() as f64).powf(penalty) * (1.0 + priority.sqrt())
    }
}

/// The schedule of one dispatched carrier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub carrier:    CarrierId,
    /// Deliveries this carrier reports, in the order they happen.
    pub deliveries: Vec<Delivery>,
    /// Tick at which the carrier is back in the mailroom and can be freed.
    pub return_at:  Tick,
}

impl Trip {
    /// Plan the trip for `dispatch` leaving at `now`.
    ///
    /// `reports_hand` is false for non-leading group members: the heavy item
    /// is delivered once, by the leader.  Every delivery lands strictly after
    /// `now`, and the carrier returns strictly after its last delivery.
    pub fn plan(dispatch: &Dispatch, now: Tick, group_ticks_per_floor: u64, reports_hand: bool) -> Self {
        let pace = if dispatch.group_size > 1 { group_ticks_per_floor } else { 1 };

        let hand_floor = dispatch.hand.destination;
        let hand_at = (now + pace * u64::from(hand_floor.0)).max(now.next());

        let mut deliveries = Vec::with_capacity(2);
        if reports_hand {
            deliveries.push(Delivery { item: dispatch.hand, carrier: dispatch.carrier, tick: hand_at });
        }

        let (last_floor, last_at) = match dispatch.tube {
            Some(tube) => {
                let tube_at = hand_at + u64::from(hand_floor.distance(tube.destination));
                deliveries.push(Delivery { item: tube, carrier: dispatch.carrier, tick: tube_at });
                (tube.destination, tube_at)
            }
            None => (hand_floor, hand_at),
        };

        let return_at = (last_at + u64::from(last_floor.distance(Floor::MAILROOM))).max(last_at.next());
        Self { carrier: dispatch.carrier, deliveries, return_at }
    }
}
