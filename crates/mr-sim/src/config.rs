//! Top-level simulation configuration.

use mr_core::{CarryCapacity, Priority, WeightTier};

use crate::{SimError, SimResult};

/// Everything needed to build a run.
///
/// Typically loaded from a JSON file by the application (enable the `serde`
/// feature) and passed to [`SimBuilder`][crate::SimBuilder].  Missing fields
/// fall back to [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of delivery floors above the mailroom (floors `1..=floors`).
    pub floors: u32,

    /// Fleet size.  All carriers start free in the mailroom.
    pub carriers: usize,

    /// Items the generator produces over the whole run.
    pub mail_to_create: usize,

    /// Arrivals are spread uniformly over `0..=last_arrival_tick`.
    pub last_arrival_tick: u64,

    /// Hard stop, whether or not all mail was delivered.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces the same mail stream.
    pub seed: u64,

    pub capacity: CarryCapacity,

    /// Probability that a generated item is priority mail.
    pub priority_chance: f64,

    /// Levels a priority item draws from (uniformly).
    pub priority_levels: Vec<u32>,

    /// Inclusive weight bounds, in grams.
    pub min_weight: u32,
    pub max_weight: u32,

    /// Ticks a carrier group needs per floor while carrying its heavy item.
    pub group_ticks_per_floor: u64,

    /// Exponent applied to the wait time when scoring a delivery.
    pub delay_penalty: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                14,
            carriers:              3,
            mail_to_create:        80,
            last_arrival_tick:     100,
            max_ticks:             10_000,
            seed:                  30_006,
            capacity:              CarryCapacity::default(),
            priority_chance:       0.25,
            priority_levels:       vec![10, 100],
            min_weight:            200,
            max_weight:            3_000,
            group_ticks_per_floor: 3,
            delay_penalty:         1.2,
        }
    }
}

impl SimConfig {
    /// Reject configurations the driver cannot run.
    ///
    /// Mail heavier than a full group is allowed through on purpose: it makes
    /// the run fail with [`SimError::Allocation`] when the item reaches the
    /// backlog front.
    pub fn validate(&self) -> SimResult<()> {
        self.capacity.validate()?;
        if self.floors == 0 {
            return Err(SimError::Config("floors must be > 0".into()));
        }
        if self.carriers == 0 {
            return Err(SimError::Config("at least one carrier is required".into()));
        }
        if self.min_weight > self.max_weight {
            return Err(SimError::Config(format!(
                "weight range {}..={} is empty",
                self.min_weight, self.max_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.priority_chance) {
            return Err(SimError::Config(format!(
                "priority_chance {} is not a probability",
                self.priority_chance
            )));
        }
        if self.priority_chance > 0.0 && self.priority_levels.is_empty() {
            return Err(SimError::Config("priority mail needs at least one level".into()));
        }
        if self.priority_levels.contains(&0) {
            return Err(SimError::Config(format!("priority levels start at {}", Priority::DEFAULT)));
        }
        // Weights above the triple capacity fail at allocation; everything up
        // to it must be liftable by this fleet.
        let heaviest_liftable = self.max_weight.min(self.capacity.max());
        if let WeightTier::Group { required } = self.capacity.tier(heaviest_liftable) {
            if required > self.carriers {
                return Err(SimError::Config(format!(
                    "{heaviest_liftable} g items need {required} carriers, fleet has {}",
                    self.carriers
                )));
            }
        }
        if self.group_ticks_per_floor == 0 {
            return Err(SimError::Config("group_ticks_per_floor must be > 0".into()));
        }
        Ok(())
    }
}
