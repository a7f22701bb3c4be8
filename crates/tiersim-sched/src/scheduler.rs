//! The `Scheduler` trait — pluggable placement policy.

use tiersim_core::{ServerId, SimTime};
use tiersim_server::Server;
use tiersim_workload::Task;

// ── Placement ────────────────────────────────────────────────────────────────

/// One successful placement: which task of the batch went where.
///
/// `task` indexes into the slice passed to [`Scheduler::schedule`]; the
/// batch only lives for one round, so an index beats carrying ids around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub task:   usize,
    pub server: ServerId,
}

// ── Trait ────────────────────────────────────────────────────────────────────

/// Places one round's batch of tasks onto the fleet.
///
/// # Contract
///
/// - Every returned [`Placement`] must be backed by a successful
///   [`Server::allocate`] call and a `mark_scheduled` on the task —
///   callers perform no further deduction.
/// - Tasks placed nowhere are left untouched; the caller decides their
///   fate.
/// - Must be deterministic given the same batch and fleet state.
///   Stateful policies (learned weights, round counters) are fine as long
///   as the state itself evolves deterministically.
pub trait Scheduler {
    /// Place as many of `tasks` as the fleet can hold right now.
    fn schedule(
        &mut self,
        tasks: &mut [Task],
        servers: &mut [Server],
        now: SimTime,
    ) -> Vec<Placement>;
}
