//! Per-server round metrics and the sink trait that receives them.

use serde::Serialize;

// ── MetricsRecord ────────────────────────────────────────────────────────────

/// One server's view of one round: what it took, what it cost, and the
/// mobility context the round ran under.
///
/// The serde renames define the CSV header schema; reporters derive their
/// column layout from the same names so every output agrees. Monetary and
/// delay aggregates are already rounded (2 dp, energy 4 dp) when the record
/// is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "Round")]
    pub round: u32,
    /// Devices submitting this round (the whole batch, not this server's
    /// share).
    #[serde(rename = "Devices")]
    pub devices: u32,
    /// KB placed on this server this round.
    #[serde(rename = "Workload")]
    pub workload_kb: f64,
    /// Mean entity distance from the centroid.
    #[serde(rename = "Avg_Pos")]
    pub avg_position: f64,
    /// Cumulative successful handovers up to this round.
    #[serde(rename = "Handovers")]
    pub handovers: u64,
    #[serde(rename = "HO_Delay(ms)")]
    pub handover_delay_ms: f64,
    /// Mean RSS of this server's tasks at placement time.
    #[serde(rename = "Signal(dB)")]
    pub signal_db: f64,
    #[serde(rename = "CPU (%)")]
    pub cpu_pct: f64,
    #[serde(rename = "Memory (%)")]
    pub memory_pct: f64,
    #[serde(rename = "Storage (%)")]
    pub storage_pct: f64,
    /// Server label, e.g. `Edge_2`.
    #[serde(rename = "Paradigm")]
    pub paradigm: String,
    #[serde(rename = "Avg_Tx(ms)")]
    pub avg_tx_ms: f64,
    #[serde(rename = "Avg_Prop(ms)")]
    pub avg_prop_ms: f64,
    #[serde(rename = "Tx_Cost")]
    pub tx_cost: f64,
    #[serde(rename = "Proc_Cost")]
    pub proc_cost: f64,
    #[serde(rename = "Energy")]
    pub energy: f64,
    /// This round's placed data against this server's link rate.
    #[serde(rename = "Conges(%)")]
    pub congestion_pct: f64,
    /// Priority code of the first task placed here this round.
    #[serde(rename = "Flag")]
    pub flag: u8,
    /// Tasks the whole round failed to place (repeated on every row).
    #[serde(rename = "Failed")]
    pub failed: u32,
}

// ── Sinks ────────────────────────────────────────────────────────────────────

/// Receives records as the engine emits them.
///
/// All methods are infallible from the engine's point of view; adapters
/// that can fail (files, sockets) buffer their first error and surface it
/// after the run.
pub trait MetricsSink {
    fn record(&mut self, record: &MetricsRecord);

    /// Called once after the final round.
    fn finish(&mut self) {}
}

/// Discards everything. Use when only the end-state matters.
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record(&mut self, _record: &MetricsRecord) {}
}

/// Accumulates rows in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub rows: Vec<MetricsRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsSink for MemorySink {
    fn record(&mut self, record: &MetricsRecord) {
        self.rows.push(record.clone());
    }
}
