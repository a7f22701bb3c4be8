//! Builder for constructing a [`Simulator`].

use tracing::info;

use tiersim_core::{DeviceId, SimClock, SimConfig, SimRng};
use tiersim_mobility::{MobileEntity, MobilityManager, Position, RandomWaypoint};
use tiersim_sched::Scheduler;
use tiersim_server::build_fleet;
use tiersim_workload::DemandSource;

use crate::error::EngineResult;
use crate::sim::Simulator;

/// Assembles a ready-to-run [`Simulator`] from a validated [`SimConfig`].
///
/// # Deployment
///
/// - The fleet is laid out exactly as the topology's position tables say.
/// - With mobility on and `apply_to_servers` set, every server gets its own
///   waypoint mover, pinned to the server's configured position.
/// - `workload.max_devices` entities exist up front, entity `i` starting at
///   (and attached to) server `i mod fleet`. With mobility on each carries
///   a waypoint mover pinned to that spot; off, they simply never move.
///
/// Every RNG stream derives from the master seed in a fixed order (fleet
/// movers first, then entities), so one seed pins the whole run.
///
/// # Example
///
/// ```rust,ignore
/// let source = WorkloadGenerator::new(config.workload.clone(), SimRng::new(config.seed + 1));
/// let mut sim = SimBuilder::new(config, GreedyTierScheduler::new(), source).build()?;
/// ```
pub struct SimBuilder<S: Scheduler, D: DemandSource> {
    config:    SimConfig,
    scheduler: S,
    source:    D,
}

impl<S: Scheduler, D: DemandSource> SimBuilder<S, D> {
    pub fn new(config: SimConfig, scheduler: S, source: D) -> Self {
        Self { config, scheduler, source }
    }

    /// Validate the whole configuration and assemble the simulator.
    ///
    /// Any inconsistency — a missing tier, a position table of the wrong
    /// length, an inverted ramp — is fatal here, before anything runs.
    pub fn build(self) -> EngineResult<Simulator<S, D>> {
        self.config.validate()?;

        let servers = build_fleet(&self.config.topology)?;
        let mob = self.config.mobility.clone();
        let mut master = SimRng::new(self.config.seed);

        // ── Fleet movers ──────────────────────────────────────────────────
        let roaming_servers = mob.enabled && mob.apply_to_servers;
        let server_movers: Vec<Option<RandomWaypoint>> = servers
            .iter()
            .enumerate()
            .map(|(slot, srv)| {
                if !roaming_servers {
                    return None;
                }
                let mut mover = RandomWaypoint::new(
                    mob.area,
                    mob.speed_range,
                    mob.pause_range,
                    master.child(slot as u64),
                );
                mover.place(srv.position());
                Some(mover)
            })
            .collect();

        // ── Entity population ─────────────────────────────────────────────
        let fleet_len = servers.len();
        let max_devices = self.config.workload.max_devices;
        let mut entities = Vec::with_capacity(max_devices as usize);
        for i in 0..max_devices {
            let home = &servers[i as usize % fleet_len];
            let mut ent = MobileEntity::new(
                DeviceId(i),
                Position::Planar(home.position()),
                mob.default_speed_m_s,
                mob.handover_threshold_db,
                mob.handover_latency_ms,
            );
            ent.attach(home.id());
            if mob.enabled {
                let mut mover = RandomWaypoint::new(
                    mob.area,
                    mob.speed_range,
                    mob.pause_range,
                    master.child(fleet_len as u64 + i as u64),
                );
                mover.place(home.position());
                ent = ent.with_waypoint(mover);
            }
            entities.push(ent);
        }

        let mobility = MobilityManager::new(entities, server_movers, mob.time_step_ms);

        info!(
            "[engine] fleet of {} servers, {} entities (mobility {})",
            fleet_len,
            max_devices,
            if mob.enabled { "on" } else { "off" },
        );

        Ok(Simulator {
            config: self.config,
            clock: SimClock::new(),
            servers,
            scheduler: self.scheduler,
            source: self.source,
            mobility,
            rounds_run: 0,
        })
    }
}
