//! baseline — reference run of the tiersim placement simulator.
//!
//! Ramps 100 → 200 devices across the default three-tier deployment
//! (3 edge micro-DCs, 2 regional sites, 1 cloud core) with random-waypoint
//! mobility on, printing the per-round metrics table and writing the same
//! rows to `results/round_metrics.csv`.  Scale comment: push `MAX_DEVICES`
//! to 6 000 (the full reference ramp) for a saturation study; the run is
//! still single-core and finishes in seconds.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tiersim_core::{SimConfig, SimRng, WorkloadConfig};
use tiersim_engine::SimBuilder;
use tiersim_report::{ConsoleReporter, CsvReporter, ReportSink, ReportWriter};
use tiersim_sched::GreedyTierScheduler;
use tiersim_workload::WorkloadGenerator;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64  = 42;
const START_DEVICES:      u32  = 100;
const MAX_DEVICES:        u32  = 200;
const DEVICE_INCREMENT:   u32  = 10;   // 100, 110, … 200 → 11 rounds
const DATA_PER_DEVICE_KB: f64  = 10.0;
const OUTPUT_CSV:         &str = "results/round_metrics.csv";

// ── Row-counting writer ───────────────────────────────────────────────────────

/// Wraps the real writers to count how many rows the run emitted.
struct CountingWriter<W: ReportWriter> {
    inner: W,
    rows:  usize,
}

impl<W: ReportWriter> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, rows: 0 }
    }
}

impl<W: ReportWriter> ReportWriter for CountingWriter<W> {
    fn write_record(
        &mut self,
        record: &tiersim_engine::MetricsRecord,
    ) -> tiersim_report::OutputResult<()> {
        self.rows += 1;
        self.inner.write_record(record)
    }

    fn finish(&mut self) -> tiersim_report::OutputResult<()> {
        self.inner.finish()
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // RUST_LOG=debug surfaces per-round summaries and handover traces.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== baseline — three-tier task placement under mobility ===");
    println!("Devices: {START_DEVICES}..={MAX_DEVICES} step {DEVICE_INCREMENT}  |  Seed: {SEED}");
    println!("(Raise MAX_DEVICES to 6000 for the full saturation ramp)");
    println!();

    // 1. Configuration: default topology and mobility, shortened ramp.
    let config = SimConfig {
        seed: SEED,
        workload: WorkloadConfig {
            start_devices:      START_DEVICES,
            max_devices:        MAX_DEVICES,
            increment:          DEVICE_INCREMENT,
            data_per_device_kb: DATA_PER_DEVICE_KB,
        },
        ..SimConfig::default()
    };
    let tiers: Vec<String> = config
        .topology
        .iter()
        .map(|(tier, spec)| format!("{tier}×{}", spec.nodes))
        .collect();
    println!(
        "Fleet: {} ({} nodes)  |  Rounds: {}",
        tiers.join(" "),
        config.topology.total_nodes(),
        config.workload.round_count()
    );
    println!();

    // 2. Build the simulator.  The workload stream gets its own seed lane so
    //    demand draws never overlap the mobility streams.
    let source = WorkloadGenerator::new(config.workload.clone(), SimRng::new(SEED + 1));
    let mut sim = SimBuilder::new(config, GreedyTierScheduler::new(), source).build()?;

    // 3. Reporters: console table + CSV file, rows counted on the way through.
    let writers = (
        ConsoleReporter::stdout(),
        CsvReporter::create(Path::new(OUTPUT_CSV))?,
    );
    let mut sink = ReportSink::new(CountingWriter::new(writers));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut sink);
    let elapsed = t0.elapsed();

    if let Some(e) = sink.take_error() {
        eprintln!("report error: {e}");
    }
    let rows = sink.into_writer().rows;

    // 5. Summary.
    let metrics = sim.mobility.metrics();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  rounds run         : {}", sim.rounds_run);
    println!("  final clock        : {}", sim.clock);
    println!(
        "  handovers          : {} of {} attempts ({:.1} ms charged)",
        metrics.handovers, metrics.handover_attempts, metrics.total_handover_delay_ms
    );
    println!(
        "  tasks placed       : {} of {} ({:.1}% dropped)",
        metrics.total_tasks - metrics.dropped_tasks,
        metrics.total_tasks,
        metrics.drop_rate() * 100.0
    );
    println!("  mean signal        : {:.2} dB", metrics.avg_rss());
    println!("  {OUTPUT_CSV} : {rows} rows");
    println!();

    // 6. Residual fleet load after the final round.
    println!("{:<12} {:<9} {:<8} {:<8} {:<8}", "Server", "In-flight", "CPU %", "Mem %", "Disk %");
    println!("{}", "-".repeat(48));
    for srv in &sim.servers {
        let util = srv.utilization();
        println!(
            "{:<12} {:<9} {:<8} {:<8} {:<8}",
            srv.label(),
            srv.in_flight(),
            util.cpu_pct,
            util.memory_pct,
            util.storage_pct,
        );
    }

    Ok(())
}
