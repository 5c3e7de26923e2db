//! Fluent builder for constructing a [`Sim`].

use mr_core::SimRng;
use mr_pool::{Allocator, CarrierStore};

use crate::{MailGenerator, Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                          |
/// |---------------|--------------------------------------------------|
/// | `.mail(v)`    | Generated from `config` with `SimRng(config.seed)` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .mail(hand_made_items)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    mail:   Option<MailGenerator>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, mail: None }
    }

    /// Replace the generated mail stream with `items`.  Each item arrives at
    /// its own `arrival` tick; ids must be unique.
    pub fn mail<I: IntoIterator<Item = mr_core::MailItem>>(mut self, items: I) -> Self {
        self.mail = Some(MailGenerator::from_items(items));
        self
    }

    /// Validate inputs, draw the mail stream, register every carrier as free,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mail = match self.mail {
            Some(m) => m,
            None => MailGenerator::generate(&self.config, &mut SimRng::new(self.config.seed)),
        };

        let floors = self.config.floors;
        if let Some(bad) = mail.pending().find(|i| i.destination.0 == 0 || i.destination.0 > floors) {
            return Err(SimError::FloorOutOfRange { item: bad.id, floor: bad.destination, floors });
        }

        let fleet = CarrierStore::new(self.config.carriers);
        let mut pool = Allocator::new(self.config.capacity);
        for carrier in fleet.ids() {
            pool.register_free(carrier);
        }

        Ok(Sim::new(self.config, pool, fleet, mail))
    }
}
