//! Task type and lifecycle.

use tiersim_core::{DeviceId, ServerId, SimTime, TaskId};

// ── Priority ─────────────────────────────────────────────────────────────────

/// Priority class attached at generation time.  Report rows carry the
/// numeric code (1 = high, 3 = low).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    /// All classes, in code order — the generator draws uniformly from this.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Normal, Priority::Low];

    /// The report code: 1 = high … 3 = low.
    pub fn code(self) -> u8 {
        match self {
            Priority::High   => 1,
            Priority::Normal => 2,
            Priority::Low    => 3,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── TaskStatus ───────────────────────────────────────────────────────────────

/// Lifecycle states.  Every submitted task ends a round in exactly one of
/// `Completed` or `Failed`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TaskStatus {
    #[default]
    Created,
    Scheduled,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Created   => "created",
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed    => "failed",
        }
    }

    /// `true` once the task can no longer change state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Failed)
    }
}

// ── Task ─────────────────────────────────────────────────────────────────────

/// One workload item emitted by a device slot.
///
/// Fields are plain data; prefer the transition methods so `status`,
/// `assigned`, and the execution window stay in step.
#[derive(Clone, Debug)]
pub struct Task {
    pub id:             TaskId,
    pub cpu_demand:     f64,
    pub storage_demand: f64,
    pub memory_demand:  f64,
    /// Declared payload, KB — what placement moves over the link.
    pub data_size_kb:   f64,
    pub priority:       Priority,
    /// Originating device slot, tagged by the engine after generation.
    pub device:         DeviceId,
    pub status:         TaskStatus,
    pub assigned:       Option<ServerId>,
    pub started_at:     Option<SimTime>,
    pub finished_at:    Option<SimTime>,
}

impl Task {
    pub fn new(
        id: TaskId,
        cpu_demand: f64,
        storage_demand: f64,
        memory_demand: f64,
        data_size_kb: f64,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            cpu_demand,
            storage_demand,
            memory_demand,
            data_size_kb,
            priority,
            device:      DeviceId::INVALID,
            status:      TaskStatus::Created,
            assigned:    None,
            started_at:  None,
            finished_at: None,
        }
    }

    /// Scheduler accepted the task onto `server`.
    pub fn mark_scheduled(&mut self, server: ServerId) {
        self.assigned = Some(server);
        self.status = TaskStatus::Scheduled;
    }

    /// Record the execution window and finish.
    pub fn complete(&mut self, start: SimTime, end: SimTime) {
        self.started_at = Some(start);
        self.finished_at = Some(end);
        self.status = TaskStatus::Completed;
    }

    /// No placement this round.
    pub fn fail(&mut self) {
        self.status = TaskStatus::Failed;
    }

    /// End minus start when both are set, else 0.0.
    pub fn execution_delay(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.since(start),
            _ => 0.0,
        }
    }
}
