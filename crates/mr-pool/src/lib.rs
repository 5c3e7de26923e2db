//! `mr-pool` — the mail pool: backlog ordering, carrier groups, and allocation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`backlog`]    | `Backlog` (priority desc, floor desc, stable on ties)      |
//! | [`group`]      | `GroupFormation` (carriers committed to one heavy item)    |
//! | [`fleet`]      | `Fleet` trait, `Carrier`, `CarrierStore`                   |
//! | [`allocator`]  | `Allocator`, `StepReport`, `Dispatch`                      |
//! | [`observer`]   | `AllocObserver`, `NoopAllocObserver`                       |
//! | [`error`]      | `AllocError`, `AllocResult<T>`                             |
//!
//! # Step model (summary)
//!
//! The external driver calls [`Allocator::step`] once per tick:
//!
//! ```text
//! loop:
//!   free ← free ∪ requeued
//!   for carrier in free (registration order):
//!     backlog empty      → carrier stays free
//!     otherwise          → assign hand (+ tube), dispatch or wait in group
//!   requeued empty       → done
//! ```
//!
//! Carriers only come back into the free set through
//! [`Allocator::register_free`] (driver) or a group dissolution (allocator).
//!
//! # Quick-start
//!
//! ```rust
//! use mr_core::{CarrierId, CarryCapacity, Floor, ItemId, MailItem, Tick};
//! use mr_pool::{Allocator, CarrierStore, NoopAllocObserver};
//!
//! let mut fleet = CarrierStore::new(1);
//! let mut pool = Allocator::new(CarryCapacity::default());
//! pool.add_item(MailItem::new(ItemId(0), Floor(3), 500, Tick(0)));
//! pool.register_free(CarrierId(0));
//!
//! let report = pool.step(&mut fleet, &mut NoopAllocObserver).unwrap();
//! assert_eq!(report.dispatches.len(), 1);
//! assert!(pool.backlog().is_empty());
//! ```

pub mod allocator;
pub mod backlog;
pub mod error;
pub mod fleet;
pub mod group;
pub mod observer;


pub use allocator::{Allocator, Dispatch, StepReport};
pub use backlog::Backlog;
pub use error::{AllocError, AllocResult};
pub use fleet::{Carrier, CarrierState, CarrierStore, Fleet};
pub use group::GroupFormation;
pub use observer::{AllocObserver, NoopAllocObserver};
