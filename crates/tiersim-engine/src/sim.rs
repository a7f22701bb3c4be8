//! The `Simulator` struct and its round loop.

use tracing::{debug, info};

use tiersim_core::{DeviceId, ServerId, SimClock, SimConfig};
use tiersim_metrics::{
    congestion_pct, mean, processing_cost, propagation_delay_ms, round_dp, tier_energy,
    transmission_cost, transmission_delay_ms,
};
use tiersim_mobility::{MobilityManager, MobilitySnapshot};
use tiersim_sched::Scheduler;
use tiersim_server::Server;
use tiersim_workload::{DemandSource, Priority};

use crate::record::{MetricsRecord, MetricsSink};

// ── Per-placement data assembled before emission ─────────────────────────────

/// What one placed task contributes to its server's round row, captured
/// before the batch is dropped so emission never re-borrows it.
struct PlacedTask {
    server:   ServerId,
    data_kb:  f64,
    cpu:      f64,
    priority: Priority,
    rss:      Option<f64>,
}

// ── Simulator ────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulator<S, D>` holds all run state and drives the seven-phase round
/// loop (see the crate docs). Create via [`SimBuilder`][crate::SimBuilder];
/// the fields are public so tests and embeddings can assemble or inspect a
/// run directly.
#[derive(Debug)]
pub struct Simulator<S: Scheduler, D: DemandSource> {
    /// The validated configuration the run was built from.
    pub config: SimConfig,

    /// Simulation clock: +1 per round, plus fractional handover penalties.
    pub clock: SimClock,

    /// The fleet, dense by `ServerId`.
    pub servers: Vec<Server>,

    /// The placement policy. Called once per round with the whole batch.
    pub scheduler: S,

    /// The demand source. Called once per round, before placement.
    pub source: D,

    /// Entities, per-server movers, and the cumulative mobility counters.
    pub mobility: MobilityManager,

    /// Rounds completed so far.
    pub rounds_run: u32,
}

impl<S: Scheduler, D: DemandSource> Simulator<S, D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every configured round, emitting one record per active server
    /// per round, then finish the sink.
    pub fn run<K: MetricsSink>(&mut self, sink: &mut K) {
        let rounds = self.config.workload.round_count();
        for round in 1..=rounds {
            self.run_round(round, sink);
        }
        sink.finish();
        info!("[engine] {} rounds complete at {}", rounds, self.clock);
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn run_round<K: MetricsSink>(&mut self, round: u32, sink: &mut K) {
        // ── Phase 1: movement and handover ────────────────────────────────
        let moved = self.mobility.advance_round(&mut self.servers);
        let snapshot = self.mobility.snapshot();

        // ── Phase 2: charge this round's handover penalty ─────────────────
        self.clock.charge_delay(moved.extra_delay_ms);
        let now = self.clock.now();

        // ── Phase 3: expire finished reservations ─────────────────────────
        for srv in &mut self.servers {
            srv.release_completed(now);
        }

        // ── Phase 4: generate the round's batch ───────────────────────────
        //
        // Device ids follow batch order, which is what ties task `i` to
        // mobile entity `i` for signal sampling.
        let mut tasks = self.source.generate(round);
        for (i, task) in tasks.iter_mut().enumerate() {
            task.device = DeviceId(i as u32);
        }
        let submitted = tasks.len();

        // ── Phase 5: placement ────────────────────────────────────────────
        //
        // The scheduler reserved capacity itself; nothing is deducted here.
        let placements = self.scheduler.schedule(&mut tasks, &mut self.servers, now);
        let failed = (submitted - placements.len()) as u32;

        // ── Phase 6: settle outcomes, feed the mobility counters ──────────
        let mut placed: Vec<PlacedTask> = Vec::with_capacity(placements.len());
        for p in &placements {
            let Some(srv) = self.servers.get(p.server.index()) else {
                continue;
            };
            let Some(task) = tasks.get_mut(p.task) else {
                continue;
            };
            task.complete(now, now.after(srv.latency_ms()));
            let rss = self
                .mobility
                .entity(task.device)
                .map(|ent| ent.signal_strength(srv));
            placed.push(PlacedTask {
                server:   p.server,
                data_kb:  task.data_size_kb,
                cpu:      task.cpu_demand,
                priority: task.priority,
                rss,
            });
        }
        for task in &mut tasks {
            if task.assigned.is_none() {
                task.fail();
            }
        }

        self.mobility
            .record_task_outcomes(submitted as u64, failed as u64);
        let round_kb: f64 = placed.iter().map(|t| t.data_kb).sum();
        self.mobility.record_throughput(round_kb);
        for sample in placed.iter().filter_map(|t| t.rss) {
            self.mobility.record_signal_sample(sample);
        }

        // ── Phase 7: emit one record per server that took work ────────────
        let devices = submitted as u32;
        for srv in &self.servers {
            let here: Vec<&PlacedTask> = placed.iter().filter(|t| t.server == srv.id()).collect();
            if here.is_empty() {
                continue;
            }
            let record = server_round_record(round, devices, failed, srv, &here, &snapshot);
            sink.record(&record);
        }

        debug!(
            "[engine] round {}: {} submitted, {} placed, {} failed, {} handovers at {}",
            round,
            submitted,
            placements.len(),
            failed,
            moved.handovers,
            self.clock,
        );

        self.clock.advance_round();
        self.rounds_run += 1;
    }
}

// ── Record assembly ──────────────────────────────────────────────────────────

/// Fold one server's placed tasks into its round row.
///
/// Delay and cost aggregates sum the per-task values and round once at the
/// row level (2 dp, energy 4 dp). Congestion is this round's placed data
/// against the link rate, not the cumulative ledger figure.
fn server_round_record(
    round: u32,
    devices: u32,
    failed: u32,
    srv: &Server,
    here: &[&PlacedTask],
    snapshot: &MobilitySnapshot,
) -> MetricsRecord {
    let n = here.len() as f64;
    let workload_kb: f64 = here.iter().map(|t| t.data_kb).sum();

    let tx_sum: f64 = here
        .iter()
        .map(|t| transmission_delay_ms(t.data_kb, srv.bandwidth_kbps()))
        .sum();
    let prop_sum: f64 = here
        .iter()
        .map(|_| propagation_delay_ms(srv.distance_m()))
        .sum();
    let tx_cost_sum: f64 = here
        .iter()
        .map(|t| transmission_cost(t.data_kb, srv.cost_per_kb()))
        .sum();
    let proc_cost_sum: f64 = here
        .iter()
        .map(|t| processing_cost(t.cpu, srv.cost_per_cpu()))
        .sum();
    let energy_sum: f64 = here
        .iter()
        .map(|t| tier_energy(srv.tier(), t.data_kb, srv.distance_m()))
        .sum();

    let rss: Vec<f64> = here.iter().filter_map(|t| t.rss).collect();
    let signal_db = mean(&rss).map(|m| round_dp(m, 2)).unwrap_or(0.0);

    let util = srv.utilization();

    MetricsRecord {
        round,
        devices,
        workload_kb: round_dp(workload_kb, 2),
        avg_position: snapshot.dispersion,
        handovers: snapshot.handovers,
        handover_delay_ms: snapshot.handover_delay_ms,
        signal_db,
        cpu_pct: util.cpu_pct,
        memory_pct: util.memory_pct,
        storage_pct: util.storage_pct,
        paradigm: srv.label().to_string(),
        avg_tx_ms: round_dp(tx_sum / n, 2),
        avg_prop_ms: round_dp(prop_sum / n, 2),
        tx_cost: round_dp(tx_cost_sum, 2),
        proc_cost: round_dp(proc_cost_sum, 2),
        energy: round_dp(energy_sum, 4),
        congestion_pct: congestion_pct(workload_kb, srv.bandwidth_kbps()),
        flag: here[0].priority.code(),
        failed,
    }
}
