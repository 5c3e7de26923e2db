//! Allocation observer trait for tracing what a step decided.

use mr_core::{CarrierId, ItemId};

use crate::{Dispatch, GroupFormation};

/// Callbacks invoked by [`Allocator::step`][crate::Allocator::step] as it
/// assigns carriers.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — dispatch printer
///
/// ```rust,ignore
/// struct DispatchPrinter;
///
/// impl AllocObserver for DispatchPrinter {
///     fn on_dispatch(&mut self, d: &Dispatch) {
///         println!("{} leaves with {}", d.carrier, d.hand);
///     }
/// }
/// ```
pub trait AllocObserver {
    /// Called once per dispatched carrier, in dispatch order.
    fn on_dispatch(&mut self, _dispatch: &Dispatch) {}

    /// Called after `carrier` joined (or founded) `group`.  The group may now
    /// be complete; if so, dispatches for its members follow immediately.
    fn on_group_joined(&mut self, _carrier: CarrierId, _group: &GroupFormation) {}

    /// Called when the formation for `item` was cancelled because a more
    /// urgent item reached the backlog front.  `released` go back to the free
    /// set within the same step.
    fn on_dissolved(&mut self, _item: ItemId, _released: &[CarrierId]) {}
}

/// An [`AllocObserver`] that does nothing.
pub struct NoopAllocObserver;

impl AllocObserver for NoopAllocObserver {}
