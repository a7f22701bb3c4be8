//! Demand sources and the linear-ramp generator.

use tiersim_core::config::WorkloadConfig;
use tiersim_core::{SimRng, TaskId};

use crate::task::{Priority, Task};

/// Pluggable task generation.
///
/// Called once per round; the returned batch is this round's entire
/// submission.  Implementations own whatever state they need (counters,
/// RNG streams, traces) — the engine only ever calls this method.
pub trait DemandSource {
    /// Produce the batch for `round` (1-based).
    fn generate(&mut self, round: u32) -> Vec<Task>;
}

/// The standard source: a linear device ramp.
///
/// Round `r` emits one task per device, `start + (r−1)·increment` devices
/// clamped to the ceiling.  Every demand field and the payload equal the
/// configured per-device data size; priorities are drawn uniformly from the
/// three classes on the generator's own RNG stream.  Task ids are strictly
/// monotonic across the whole run.
pub struct WorkloadGenerator {
    workload: WorkloadConfig,
    rng:      SimRng,
    next_id:  u64,
}

impl WorkloadGenerator {
    pub fn new(workload: WorkloadConfig, rng: SimRng) -> Self {
        Self { workload, rng, next_id: 0 }
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.workload
    }
}

impl DemandSource for WorkloadGenerator {
    fn generate(&mut self, round: u32) -> Vec<Task> {
        let devices = self.workload.devices_for_round(round);
        let data_kb = self.workload.data_per_device_kb;

        let mut batch = Vec::with_capacity(devices as usize);
        for _ in 0..devices {
            let id = TaskId(self.next_id);
            self.next_id += 1;
            // Uniform and non-empty, so the draw cannot fail.
            let priority = *self
                .rng
                .choose(&Priority::ALL)
                .unwrap_or(&Priority::Normal);
            batch.push(Task::new(id, data_kb, data_kb, data_kb, data_kb, priority));
        }
        batch
    }
}
