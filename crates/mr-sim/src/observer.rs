//! Simulation observer trait for progress reporting and data collection.

use mr_core::{MailItem, Tick};
use mr_pool::AllocObserver;

use crate::{Delivery, SimSummary, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// Every `SimObserver` is also an [`AllocObserver`]: the sim hands it straight
/// to [`Allocator::step`][mr_pool::Allocator::step], so dispatch, group, and
/// dissolution events arrive in the same stream as tick events.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl AllocObserver for ProgressPrinter {}
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         println!("{}: {} waiting, {} out", stats.tick, stats.backlog, stats.in_transit);
///     }
/// }
/// ```
pub trait SimObserver: AllocObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when `item` enters the backlog.
    fn on_arrival(&mut self, _tick: Tick, _item: &MailItem) {}

    /// Called when an item reaches its floor.
    fn on_delivery(&mut self, _delivery: &Delivery) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _summary: &SimSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl AllocObserver for NoopObserver {}

impl SimObserver for NoopObserver {}
