//! `mr-core` — foundational types for the mailroom allocation workspace.
//!
//! This crate is a dependency of every other `mr-*` crate.  It has no
//! `mr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ItemId`, `CarrierId`, `Floor`                        |
//! | [`item`]        | `MailItem`, `Priority`                                |
//! | [`capacity`]    | `CarryCapacity`, `WeightTier`                         |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod capacity;
pub mod error;
pub mod ids;
pub mod item;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capacity::{CarryCapacity, WeightTier};
pub use error::{CoreError, CoreResult};
pub use ids::{CarrierId, Floor, ItemId};
pub use item::{MailItem, Priority};
pub use rng::SimRng;
pub use time::Tick;
