//! Plain data row types written by output backends.

use mr_sim::{Delivery, TickStats};

/// One delivered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRow {
    pub item_id:        u32,
    pub carrier_id:     u32,
    pub floor:          u32,
    pub weight:         u32,
    /// Priority level; `0` for ordinary mail.
    pub priority:       u32,
    pub arrival_tick:   u64,
    pub delivered_tick: u64,
    pub wait_ticks:     u64,
}

impl From<&Delivery> for DeliveryRow {
    fn from(d: &Delivery) -> Self {
        Self {
            item_id:        d.item.id.0,
            carrier_id:     d.carrier.0,
            floor:          d.item.destination.0,
            weight:         d.item.weight,
            priority:       d.item.priority.map_or(0, |p| p.0),
            arrival_tick:   d.item.arrival.0,
            delivered_tick: d.tick.0,
            wait_ticks:     d.wait_ticks(),
        }
    }
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub arrivals:     u64,
    pub dispatched:   u64,
    pub dissolutions: u64,
    pub delivered:    u64,
    pub backlog:      u64,
    pub in_transit:   u64,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(s: &TickStats) -> Self {
        Self {
            tick:         s.tick.0,
            arrivals:     s.arrivals as u64,
            dispatched:   s.dispatched as u64,
            dissolutions: s.dissolutions as u64,
            delivered:    s.delivered as u64,
            backlog:      s.backlog as u64,
            in_transit:   s.in_transit as u64,
        }
    }
}
