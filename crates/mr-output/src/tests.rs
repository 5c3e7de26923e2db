//! Integration tests for mr-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DeliveryRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn delivery_row(item_id: u32, delivered_tick: u64) -> DeliveryRow {
        DeliveryRow {
            item_id,
            carrier_id:   item_id % 3,
            floor:        item_id + 1,
            weight:       500,
            priority:     0,
            arrival_tick: 1,
            delivered_tick,
            wait_ticks:   delivered_tick - 1,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            arrivals:     2,
            dispatched:   1,
            dissolutions: 0,
            delivered:    tick,
            backlog:      4,
            in_transit:   3,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("deliveries.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["item_id", "carrier_id", "floor", "weight", "priority", "arrival_tick", "delivered_tick", "wait_ticks"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "arrivals", "dispatched", "dissolutions", "delivered", "backlog", "in_transit"]);
    }

    #[test]
    fn csv_delivery_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_deliveries(&[delivery_row(0, 5), delivery_row(1, 5)]).unwrap();
        w.write_deliveries(&[delivery_row(2, 9)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // item_id
        assert_eq!(&rows[1][2], "2"); // floor
        assert_eq!(&rows[2][6], "9"); // delivered_tick
        assert_eq!(&rows[2][7], "8"); // wait_ticks
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<_> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "2", "1", "0", "3", "4", "3"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_deliveries(&[]).unwrap();
    }

    #[test]
    fn csv_missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use mr_core::{CarrierId, Floor, ItemId, MailItem, Tick};
    use mr_sim::{Delivery, TickStats};

    use crate::row::{DeliveryRow, TickSummaryRow};

    #[test]
    fn delivery_row_from_delivery() {
        let item = MailItem::new(ItemId(7), Floor(4), 1_250, Tick(10)).with_priority(100);
        let row = DeliveryRow::from(&Delivery { item, carrier: CarrierId(2), tick: Tick(16) });
        assert_eq!(
            row,
            DeliveryRow {
                item_id:        7,
                carrier_id:     2,
                floor:          4,
                weight:         1_250,
                priority:       100,
                arrival_tick:   10,
                delivered_tick: 16,
                wait_ticks:     6,
            }
        );
    }

    #[test]
    fn ordinary_mail_has_priority_zero() {
        let item = MailItem::new(ItemId(0), Floor(1), 100, Tick(0));
        let row = DeliveryRow::from(&Delivery { item, carrier: CarrierId(0), tick: Tick(1) });
        assert_eq!(row.priority, 0);
    }

    #[test]
    fn summary_row_from_stats() {
        let stats = TickStats { tick: Tick(9), arrivals: 1, dispatched: 2, backlog: 5, ..TickStats::default() };
        let row = TickSummaryRow::from(&stats);
        assert_eq!(row.tick, 9);
        assert_eq!(row.dispatched, 2);
        assert_eq!(row.backlog, 5);
        assert_eq!(row.in_transit, 0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use mr_core::{Floor, ItemId, MailItem, Tick};
    use mr_sim::{SimBuilder, SimConfig};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{DeliveryRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn single_carrier_config() -> SimConfig {
        SimConfig { carriers: 1, max_weight: 2_000, max_ticks: 100, ..SimConfig::default() }
    }

    /// Writer that keeps rows in memory and can be told to fail.
    #[derive(Default)]
    struct MemWriter {
        deliveries: Vec<DeliveryRow>,
        summaries:  Vec<TickSummaryRow>,
        batches:    usize,
        finishes:   usize,
        fail:       bool,
    }

    impl OutputWriter for MemWriter {
        fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
            self.batches += 1;
            self.deliveries.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn deliveries_batched_per_tick() {
        let mut sim = SimBuilder::new(single_carrier_config())
            .mail([
                MailItem::new(ItemId(0), Floor(2), 500, Tick(0)),
                MailItem::new(ItemId(1), Floor(2), 400, Tick(0)),
            ])
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        // Hand and tube both go to floor 2 and land on the same tick.
        assert_eq!(w.deliveries.len(), 2);
        assert_eq!(w.batches, 1);
        assert!(w.deliveries.iter().all(|d| d.delivered_tick == 2));
        assert_eq!(w.summaries.len(), 3);
        assert_eq!(w.summaries[2].delivered, 2);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(single_carrier_config())
            .mail([MailItem::new(ItemId(0), Floor(1), 500, Tick(0))])
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("expected stored I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(single_carrier_config())
            .mail([MailItem::new(ItemId(0), Floor(3), 500, Tick(0))])
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][6], "3"); // delivered_tick
        assert_eq!(&rows[0][7], "3"); // wait_ticks

        // Ticks 0..=3: dispatch at 0, delivery at 3.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][2], "1"); // dispatched at tick 0
    }
}
