//! Greedy tier-order placement.

use tracing::trace;

use tiersim_core::{SimTime, Tier};
use tiersim_server::Server;
use tiersim_workload::Task;

use crate::scheduler::{Placement, Scheduler};

/// Walks [`Tier::ORDER`] per task and packs the busiest feasible node.
///
/// Within a tier, eligible servers compete on summed availability
/// (cpu + memory + storage) and the **lowest** sum wins, first on ties.
/// Preferring the fullest node saturates servers one at a time, which is
/// what makes congestion visible in the round metrics. A tier with no
/// eligible server falls through to the next; a task no tier can hold is
/// left unscheduled.
#[derive(Debug, Default)]
pub struct GreedyTierScheduler;

impl GreedyTierScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for GreedyTierScheduler {
    fn schedule(
        &mut self,
        tasks: &mut [Task],
        servers: &mut [Server],
        now: SimTime,
    ) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(tasks.len());

        for (idx, task) in tasks.iter_mut().enumerate() {
            let mut placed = false;
            for tier in Tier::ORDER {
                let Some(pick) = busiest_eligible(servers, tier, task) else {
                    continue;
                };
                let srv = &mut servers[pick];
                let release_at = now.after(srv.latency_ms());
                if srv.allocate(
                    task.id,
                    task.cpu_demand,
                    task.storage_demand,
                    task.memory_demand,
                    release_at,
                ) {
                    task.mark_scheduled(srv.id());
                    placements.push(Placement { task: idx, server: srv.id() });
                    placed = true;
                    break;
                }
            }
            if !placed {
                trace!("[sched] no feasible server for task {}", task.id);
            }
        }
        placements
    }
}

/// Index of the eligible server of `tier` with the lowest summed
/// availability; first wins on ties. `None` when the tier has no room.
fn busiest_eligible(servers: &[Server], tier: Tier, task: &Task) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, srv) in servers.iter().enumerate() {
        if srv.tier() != tier
            || !srv.can_allocate(task.cpu_demand, task.storage_demand, task.memory_demand)
        {
            continue;
        }
        let headroom = srv.available_cpu() + srv.available_memory() + srv.available_storage();
        match best {
            Some((_, lowest)) if headroom >= lowest => {}
            _ => best = Some((i, headroom)),
        }
    }
    best.map(|(i, _)| i)
}
