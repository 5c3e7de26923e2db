//! `mr-sim` — tick loop driver for the mailroom allocation core.
//!
//! The allocation core in `mr-pool` does not know about time, travel, or where
//! mail comes from.  This crate supplies those collaborators so the core can
//! be run end to end.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..:
//!   ① Returns    — carriers back in the mailroom are reset and registered free.
//!   ② Deliveries — items reaching their floor this tick are reported.
//!   ③ Arrivals   — mail generated for this tick enters the backlog.
//!   ④ Allocate   — Allocator::step assigns free carriers.
//!   ⑤ Trips      — each dispatched carrier gets delivery and return ticks.
//! stop when all mail is delivered or config.max_ticks is reached
//! ```
//!
//! # Movement model
//!
//! A carrier climbs one floor per tick.  A group climbs one floor every
//! `group_ticks_per_floor` ticks until the heavy item is delivered, after
//! which its members split and continue at single speed (tube delivery,
//! then straight back down to the mailroom).
//!
//! # Quick-start
//!
//! ```rust
//! use mr_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let config = SimConfig { mail_to_create: 20, ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config).build().unwrap();
//! let summary = sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(summary.delivered, 20);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod generator;
pub mod observer;
pub mod queue;
pub mod sim;
pub mod trip;


pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use generator::MailGenerator;
pub use observer::{NoopObserver, SimObserver};
pub use queue::TickQueue;
pub use sim::{Sim, SimSummary, TickStats};
pub use trip::{Delivery, Trip};
