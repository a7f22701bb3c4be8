//! The per-node capacity ledger.

use std::fmt;

use rustc_hash::FxHashMap;
use tiersim_core::config::TierSpec;
use tiersim_core::{ServerId, SimTime, TaskId, Tier, Vec2};
use tiersim_metrics::usage::{congestion_pct, utilization_pct};

/// Resources held by one in-flight task, restored verbatim at release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reservation {
    pub cpu:        f64,
    pub storage:    f64,
    pub memory:     f64,
    pub release_at: SimTime,
}

/// Per-resource utilization percentages (2 dp).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Utilization {
    pub cpu_pct:     f64,
    pub storage_pct: f64,
    pub memory_pct:  f64,
}

/// One compute node: fixed capacities, live availability, and the
/// reservation ledger.
///
/// Invariant: every deduction is mirrored by exactly one restore, so each
/// availability stays within `[0, capacity]` for the whole run.  The only
/// mutation paths are [`allocate`](Server::allocate),
/// [`release_completed`](Server::release_completed), and
/// [`set_position`](Server::set_position).
#[derive(Debug, Clone)]
pub struct Server {
    id:    ServerId,
    tier:  Tier,
    label: String,

    cpu_capacity:     f64,
    storage_capacity: f64,
    memory_capacity:  f64,
    bandwidth_kbps:   f64,
    latency_ms:       f64,
    cost_per_cpu:     f64,
    cost_per_kb:      f64,
    distance_m:       f64,
    position:         Vec2,

    available_cpu:     f64,
    available_storage: f64,
    available_memory:  f64,

    reservations:  FxHashMap<TaskId, Reservation>,
    total_data_kb: f64,
    total_cost:    f64,
}

impl Server {
    /// Stamp a node out of its tier template.  `slot` is the 0-based index
    /// within the tier; labels are 1-based (`Edge_1`).
    pub fn new(id: ServerId, tier: Tier, slot: u32, spec: &TierSpec, position: Vec2) -> Self {
        Self {
            id,
            tier,
            label: format!("{}_{}", tier, slot + 1),
            cpu_capacity:      spec.cpu,
            storage_capacity:  spec.storage,
            memory_capacity:   spec.memory,
            bandwidth_kbps:    spec.bandwidth_kbps,
            latency_ms:        spec.latency_ms,
            cost_per_cpu:      spec.cost_per_cpu,
            cost_per_kb:       spec.cost_per_kb,
            distance_m:        spec.distance_m,
            position,
            available_cpu:     spec.cpu,
            available_storage: spec.storage,
            available_memory:  spec.memory,
            reservations:      FxHashMap::default(),
            total_data_kb:     0.0,
            total_cost:        0.0,
        }
    }

    // ── Ledger operations ─────────────────────────────────────────────────

    /// Pure feasibility check against current availability.
    #[inline]
    pub fn can_allocate(&self, cpu: f64, storage: f64, memory: f64) -> bool {
        self.available_cpu >= cpu
            && self.available_storage >= storage
            && self.available_memory >= memory
    }

    /// Atomically reserve resources for `task` until `release_at`.
    ///
    /// On success deducts all three demands, records the reservation, and
    /// accumulates the data and cost counters (the storage demand doubles as
    /// the transferred payload size).  On infeasibility returns `false` with
    /// no mutation at all.
    pub fn allocate(
        &mut self,
        task: TaskId,
        cpu: f64,
        storage: f64,
        memory: f64,
        release_at: SimTime,
    ) -> bool {
        if !self.can_allocate(cpu, storage, memory) {
            return false;
        }
        // A duplicate id would leak the first reservation's deduction.
        if self.reservations.contains_key(&task) {
            return false;
        }
        self.available_cpu -= cpu;
        self.available_storage -= storage;
        self.available_memory -= memory;
        self.reservations
            .insert(task, Reservation { cpu, storage, memory, release_at });
        self.total_data_kb += storage;
        self.total_cost += cpu * self.cost_per_cpu + storage * self.cost_per_kb;
        true
    }

    /// Release every reservation whose deadline has passed, restoring
    /// exactly the recorded quantities.  Idempotent: a second call at the
    /// same instant finds nothing left to release.
    pub fn release_completed(&mut self, now: SimTime) {
        let due: Vec<TaskId> = self
            .reservations
            .iter()
            .filter(|(_, r)| r.release_at <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in due {
            if let Some(r) = self.reservations.remove(&id) {
                self.available_cpu += r.cpu;
                self.available_storage += r.storage;
                self.available_memory += r.memory;
            }
        }
    }

    // ── Metrics ───────────────────────────────────────────────────────────

    /// Live utilization per resource (2 dp; zero-capacity nodes read idle).
    pub fn utilization(&self) -> Utilization {
        Utilization {
            cpu_pct:     utilization_pct(self.available_cpu, self.cpu_capacity),
            storage_pct: utilization_pct(self.available_storage, self.storage_capacity),
            memory_pct:  utilization_pct(self.available_memory, self.memory_capacity),
        }
    }

    /// Cumulative transferred data vs. bandwidth (2 dp).
    pub fn congestion(&self) -> f64 {
        congestion_pct(self.total_data_kb, self.bandwidth_kbps)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ServerId {
        self.id
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// `"<Tier>_<n>"`, used as the report row's paradigm column.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Mobility write-back for nomadic nodes.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn latency_ms(&self) -> f64 {
        self.latency_ms
    }

    #[inline]
    pub fn bandwidth_kbps(&self) -> f64 {
        self.bandwidth_kbps
    }

    #[inline]
    pub fn cost_per_cpu(&self) -> f64 {
        self.cost_per_cpu
    }

    #[inline]
    pub fn cost_per_kb(&self) -> f64 {
        self.cost_per_kb
    }

    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    #[inline]
    pub fn available_cpu(&self) -> f64 {
        self.available_cpu
    }

    #[inline]
    pub fn available_storage(&self) -> f64 {
        self.available_storage
    }

    #[inline]
    pub fn available_memory(&self) -> f64 {
        self.available_memory
    }

    #[inline]
    pub fn cpu_capacity(&self) -> f64 {
        self.cpu_capacity
    }

    #[inline]
    pub fn storage_capacity(&self) -> f64 {
        self.storage_capacity
    }

    #[inline]
    pub fn memory_capacity(&self) -> f64 {
        self.memory_capacity
    }

    /// Reservations currently held.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.reservations.len()
    }

    /// Ledger entry for `task`, if still in flight.
    pub fn reservation(&self, task: TaskId) -> Option<&Reservation> {
        self.reservations.get(&task)
    }

    #[inline]
    pub fn total_data_kb(&self) -> f64 {
        self.total_data_kb
    }

    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.utilization();
        write!(
            f,
            "{} | cpu {:.2}% | mem {:.2}% | storage {:.2}% | tasks {} | cost {:.2} | congestion {:.2}%",
            self.label,
            u.cpu_pct,
            u.memory_pct,
            u.storage_pct,
            self.reservations.len(),
            self.total_cost,
            self.congestion(),
        )
    }
}
