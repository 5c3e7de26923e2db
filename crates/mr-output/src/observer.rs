//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mr_pool::AllocObserver;
use mr_sim::{Delivery, SimObserver, SimSummary, TickStats};

use crate::row::{DeliveryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes deliveries and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Deliveries are buffered for the current tick and written as one batch at
/// tick end.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<DeliveryRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_deliveries(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_deliveries(&self.pending);
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> AllocObserver for SimOutputObserver<W> {}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_delivery(&mut self, delivery: &Delivery) {
        self.pending.push(DeliveryRow::from(delivery));
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.flush_deliveries();
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(stats));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &SimSummary) {
        self.flush_deliveries();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
