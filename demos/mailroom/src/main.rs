//! mailroom — run the mail-pool allocator in a simulated office building.
//!
//! Usage: `mailroom [config.json]`
//!
//! Without an argument the default configuration is used (14 floors, 3
//! carriers, 80 items).  Any field missing from the JSON file keeps its
//! default.  Output CSVs are written to `output/mailroom/`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use mr_core::{CarrierId, ItemId};
use mr_output::{CsvWriter, OutputWriter, SimOutputObserver};
use mr_pool::{AllocObserver, Dispatch, GroupFormation};
use mr_sim::{Delivery, SimBuilder, SimConfig, SimObserver, SimSummary, TickStats};

const OUTPUT_DIR: &str = "output/mailroom";

// ── Observer wrapper to count events ─────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    delivery_rows:  usize,
    summary_rows:   usize,
    groups_sent:    usize,
    dissolutions:   usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, delivery_rows: 0, summary_rows: 0, groups_sent: 0, dissolutions: 0 }
    }
}

impl<W: OutputWriter> AllocObserver for CountingObserver<W> {
    fn on_dispatch(&mut self, dispatch: &Dispatch) {
        if dispatch.group_size > 1 {
            self.groups_sent += 1;
        }
        self.inner.on_dispatch(dispatch);
    }

    fn on_group_joined(&mut self, carrier: CarrierId, group: &GroupFormation) {
        self.inner.on_group_joined(carrier, group);
    }

    fn on_dissolved(&mut self, item: ItemId, released: &[CarrierId]) {
        self.dissolutions += 1;
        self.inner.on_dissolved(item, released);
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_delivery(&mut self, delivery: &Delivery) {
        self.delivery_rows += 1;
        self.inner.on_delivery(delivery);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.summary_rows += 1;
        self.inner.on_tick_end(stats);
    }

    fn on_sim_end(&mut self, summary: &SimSummary) {
        self.inner.on_sim_end(summary);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== mailroom — mail-pool allocator ===");
    println!(
        "Floors: {}  |  Carriers: {}  |  Mail: {}  |  Seed: {}",
        config.floors, config.carriers, config.mail_to_create, config.seed
    );
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation finished in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks               : {}", summary.ticks);
    println!("  delivered           : {} / {}", summary.delivered, sim.mail.created());
    println!("  mean wait (ticks)   : {:.2}", summary.mean_wait_ticks);
    println!("  score               : {:.2}", summary.score);
    println!("  group dispatches    : {}", obs.groups_sent);
    println!("  dissolved groups    : {}", obs.dissolutions);
    println!("  deliveries.csv      : {} rows", obs.delivery_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    if !summary.completed {
        println!("  (stopped at max_ticks with {} items still in the backlog)", sim.pool.backlog().len());
    }

    Ok(())
}
