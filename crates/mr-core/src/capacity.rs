//! Carry capacities and the weight tiers they induce.
//!
//! # Tiers
//!
//! ```text
//! weight <= individual            → one carrier
//! individual < weight <= pair     → group of two
//! pair < weight <= triple         → group of three
//! weight > triple                 → nobody can move it
//! ```
//!
//! Every boundary is inclusive on the lighter side.

use crate::{CoreError, CoreResult};

/// How heavy an item may be for each carrier configuration, in grams.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarryCapacity {
    /// Heaviest item one carrier can lift alone.
    pub individual: u32,
    /// Heaviest item two carriers can lift together.
    pub pair:       u32,
    /// Heaviest item three carriers can lift together (absolute maximum).
    pub triple:     u32,
}

impl Default for CarryCapacity {
    fn default() -> Self {
        Self { individual: 2_000, pair: 2_600, triple: 3_000 }
    }
}

/// Classification of one item weight against a [`CarryCapacity`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WeightTier {
    /// A single carrier can take it.
    Individual,
    /// `required` carriers (2 or 3) must lift it together.
    Group { required: usize },
    /// Heavier than a full group can lift.
    OverCapacity,
}

impl CarryCapacity {
    /// Reject capacities that do not describe strictly growing tiers.
    pub fn validate(&self) -> CoreResult<()> {
        if self.individual == 0 {
            return Err(CoreError::Config("individual capacity must be > 0".into()));
        }
        if self.pair <= self.individual {
            return Err(CoreError::Config(format!(
                "pair capacity {} must exceed individual capacity {}",
                self.pair, self.individual
            )));
        }
        if self.triple < self.pair {
            return Err(CoreError::Config(format!(
                "triple capacity {} must be at least pair capacity {}",
                self.triple, self.pair
            )));
        }
        Ok(())
    }

    /// The heaviest item any configuration can move.
    #[inline]
    pub fn max(&self) -> u32 {
        self.triple
    }

    pub fn tier(&self, weight: u32) -> WeightTier {
        if weight <= self.individual {
            WeightTier::Individual
        } else if weight <= self.pair {
            WeightTier::Group { required: 2 }
        } else if weight <= self.triple {
            WeightTier::Group { required: 3 }
        } else {
            WeightTier::OverCapacity
        }
    }

    #[inline]
    pub fn is_individual(&self, weight: u32) -> bool {
        weight <= self.individual
    }
}
