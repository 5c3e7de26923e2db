//! The `Sim` struct and its tick loop.

use mr_core::{CarrierId, Tick};
use mr_pool::{Allocator, CarrierStore};

use crate::{Delivery, MailGenerator, SimConfig, SimObserver, SimResult, TickQueue, Trip};

// ── Reporting types ───────────────────────────────────────────────────────────

/// Counters for one processed tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    pub tick:         Tick,
    /// Items that entered the backlog this tick.
    pub arrivals:     usize,
    /// Carriers that left the mailroom this tick.
    pub dispatched:   usize,
    /// Group formations cancelled by priority this tick.
    pub dissolutions: usize,
    /// Items that reached their floor this tick.
    pub delivered:    usize,
    /// Backlog length after allocation.
    pub backlog:      usize,
    /// Carriers out of the mailroom after allocation.
    pub in_transit:   usize,
}

/// Totals for a finished run.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SimSummary {
    /// Ticks processed.
    pub ticks:            u64,
    pub delivered:        usize,
    pub total_wait_ticks: u64,
    pub mean_wait_ticks:  f64,
    /// Sum of [`Delivery::score`] over all deliveries.
    pub score:            f64,
    /// `true` if every generated item was delivered before `max_ticks`.
    pub completed:        bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The mailroom simulation runner.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// The tick about to be processed.
    pub clock: Tick,

    /// The allocation core: backlog, free set, pending formation.
    pub pool: Allocator,

    /// Carrier slots and flags.
    pub fleet: CarrierStore,

    /// Mail that has not arrived yet.
    pub mail: MailGenerator,

    /// Deliveries scheduled by dispatched trips.
    pub deliveries: TickQueue<Delivery>,

    /// Carriers on their way back to the mailroom.
    pub returns: TickQueue<CarrierId>,

    delivered:  usize,
    total_wait: u64,
    score:      f64,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, pool: Allocator, fleet: CarrierStore, mail: MailGenerator) -> Self {
        Self {
            config,
            clock: Tick::ZERO,
            pool,
            fleet,
            mail,
            deliveries: TickQueue::new(),
            returns: TickQueue::new(),
            delivered: 0,
            total_wait: 0,
            score: 0.0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every item is delivered or `config.max_ticks` is reached.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        while !self.is_finished() && self.clock.0 < self.config.max_ticks {
            self.step_tick(observer)?;
        }
        let summary = self.summary();
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Process exactly `n` ticks from the current position (ignores
    /// `max_ticks` and completion).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_tick(observer)?;
        }
        Ok(())
    }

    /// `true` once every generated item has been delivered.
    pub fn is_finished(&self) -> bool {
        self.mail.is_exhausted() && self.delivered == self.mail.created()
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Totals so far.
    pub fn summary(&self) -> SimSummary {
        let mean_wait_ticks = match self.delivered {
            0 => 0.0,
            n => self.total_wait as f64 / n as f64,
        };
        SimSummary {
            ticks: self.clock.0,
            delivered: self.delivered,
            total_wait_ticks: self.total_wait,
            mean_wait_ticks,
            score: self.score,
            completed: self.is_finished(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Process the current tick and advance the clock.
    pub fn step_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickStats> {
        let now = self.clock;
        observer.on_tick_start(now);
        let mut stats = TickStats { tick: now, ..TickStats::default() };

        // ── Phase 1: carriers back in the mailroom ────────────────────────
        for carrier in self.returns.drain_tick(now).unwrap_or_default() {
            self.fleet.get_mut(carrier).reset();
            self.pool.register_free(carrier);
        }

        // ── Phase 2: deliveries landing this tick ─────────────────────────
        for delivery in self.deliveries.drain_tick(now).unwrap_or_default() {
            self.delivered += 1;
            self.total_wait += delivery.wait_ticks();
            self.score += delivery.score(self.config.delay_penalty);
            stats.delivered += 1;
            observer.on_delivery(&delivery);
        }

        // ── Phase 3: new mail ─────────────────────────────────────────────
        for item in self.mail.drain_tick(now) {
            observer.on_arrival(now, &item);
            self.pool.add_item(item);
            stats.arrivals += 1;
        }

        // ── Phase 4: allocation ───────────────────────────────────────────
        let report = self.pool.step(&mut self.fleet, observer)?;
        let outbox = self.fleet.take_dispatched();
        debug_assert!(outbox.iter().copied().eq(report.dispatched_carriers()));

        // ── Phase 5: start trips ──────────────────────────────────────────
        //
        // Group members all hold the heavy item; only the leader reports it.
        for dispatch in &report.dispatches {
            let reports_hand = dispatch.group_size == 1 || self.fleet.get(dispatch.carrier).is_leader;
            let trip = Trip::plan(dispatch, now, self.config.group_ticks_per_floor, reports_hand);
            for delivery in trip.deliveries {
                self.deliveries.push(delivery.tick, delivery);
            }
            self.returns.push(trip.return_at, trip.carrier);
        }

        stats.dispatched = report.dispatches.len();
        stats.dissolutions = report.dissolutions;
        stats.backlog = self.pool.backlog().len();
        stats.in_transit = self.returns.len();
        observer.on_tick_end(&stats);

        self.clock = now.next();
        Ok(stats)
    }
}
