//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `deliveries.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, TickSummaryRow};

pub const DELIVERY_HEADERS: [&str; 8] = [
    "item_id",
    "carrier_id",
    "floor",
    "weight",
    "priority",
    "arrival_tick",
    "delivered_tick",
    "wait_ticks",
];

pub const TICK_SUMMARY_HEADERS: [&str; 7] =
    ["tick", "arrivals", "dispatched", "dissolutions", "delivered", "backlog", "in_transit"];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    deliveries: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(DELIVERY_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADERS)?;

        Ok(Self { deliveries, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries.write_record(&[
                row.item_id.to_string(),
                row.carrier_id.to_string(),
                row.floor.to_string(),
                row.weight.to_string(),
                row.priority.to_string(),
                row.arrival_tick.to_string(),
                row.delivered_tick.to_string(),
                row.wait_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrivals.to_string(),
            row.dispatched.to_string(),
            row.dissolutions.to_string(),
            row.delivered.to_string(),
            row.backlog.to_string(),
            row.in_transit.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
