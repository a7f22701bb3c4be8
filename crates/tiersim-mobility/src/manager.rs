//! Round-level mobility orchestration.

use tracing::debug;

use tiersim_core::{DeviceId, Vec2};
use tiersim_metrics::round_dp;
use tiersim_server::Server;

use crate::entity::MobileEntity;
use crate::metrics::MobilityMetrics;
use crate::waypoint::RandomWaypoint;

/// What one round of movement produced. Callers charge exactly this — the
/// cumulative totals live in [`MobilityMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundMobility {
    pub handovers:      u32,
    pub extra_delay_ms: f64,
}

/// Positional spread plus cumulative handover totals, sampled every round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobilitySnapshot {
    /// Mean distance of entities from their centroid, 2 dp. 0.0 when no
    /// entities exist.
    pub dispersion:        f64,
    pub handovers:         u64,
    pub handover_delay_ms: f64,
}

/// Owns every mobile entity plus the optional per-server movers, advances
/// them in lockstep each round, and applies the handover rule.
#[derive(Debug)]
pub struct MobilityManager {
    entities:      Vec<MobileEntity>,
    server_movers: Vec<Option<RandomWaypoint>>,
    time_step_ms:  f64,
    metrics:       MobilityMetrics,
}

impl MobilityManager {
    /// `server_movers` must parallel the fleet this manager is advanced
    /// against: one slot per server, `None` for static nodes.
    pub fn new(
        entities: Vec<MobileEntity>,
        server_movers: Vec<Option<RandomWaypoint>>,
        time_step_ms: f64,
    ) -> Self {
        Self {
            entities,
            server_movers,
            time_step_ms,
            metrics: MobilityMetrics::default(),
        }
    }

    /// Advance one round: move model-backed servers (writing positions
    /// back), move every entity, then evaluate associations.
    ///
    /// Unattached entities take the loudest server penalty-free. For
    /// attached ones, a raw best differing from the attachment counts an
    /// attempt; only a gain clearing the entity's threshold performs the
    /// switch. Returns strictly this round's switches and delay.
    pub fn advance_round(&mut self, servers: &mut [Server]) -> RoundMobility {
        for (slot, mover) in self.server_movers.iter_mut().enumerate() {
            if let (Some(m), Some(srv)) = (mover.as_mut(), servers.get_mut(slot)) {
                srv.set_position(m.advance(self.time_step_ms));
            }
        }

        let mut round = RoundMobility::default();
        for ent in &mut self.entities {
            ent.advance(self.time_step_ms);

            let Some(best) = ent.best_server(servers) else {
                continue;
            };
            match ent.attached() {
                None => ent.attach(best),
                Some(current) if best != current => {
                    self.metrics.handover_attempts += 1;
                    // The hysteresis gate lives in `pick_server`; a pick that
                    // still names the current server means the gain fell short.
                    if ent.pick_server(servers) == Some(best) {
                        let delay = ent.handover(best);
                        round.handovers += 1;
                        round.extra_delay_ms += delay;
                        self.metrics.handovers += 1;
                        self.metrics.total_handover_delay_ms += delay;
                        debug!("[mobility] {} handover {} -> {}", ent.id(), current, best);
                    }
                }
                Some(_) => {}
            }
        }
        round
    }

    /// Sample dispersion and the cumulative handover totals.
    pub fn snapshot(&self) -> MobilitySnapshot {
        let dispersion = if self.entities.is_empty() {
            0.0
        } else {
            let n = self.entities.len() as f64;
            let mut cx = 0.0;
            let mut cy = 0.0;
            for ent in &self.entities {
                let p = ent.position().as_planar();
                cx += p.x;
                cy += p.y;
            }
            let centroid = Vec2::new(cx / n, cy / n);
            let total: f64 = self
                .entities
                .iter()
                .map(|e| e.position().as_planar().distance(centroid))
                .sum();
            round_dp(total / n, 2)
        };
        MobilitySnapshot {
            dispersion,
            handovers: self.metrics.handovers,
            handover_delay_ms: self.metrics.total_handover_delay_ms,
        }
    }

    /// Fold one round of task outcomes into the cumulative counters.
    pub fn record_task_outcomes(&mut self, submitted: u64, dropped: u64) {
        self.metrics.total_tasks += submitted;
        self.metrics.dropped_tasks += dropped;
    }

    /// Record the RSS a task saw at placement time.
    pub fn record_signal_sample(&mut self, db: f64) {
        self.metrics.rss_samples.push(db);
    }

    /// Record one round's placed payload, KB.
    pub fn record_throughput(&mut self, kb: f64) {
        self.metrics.throughput_samples.push(kb);
    }

    /// Charge out-of-coverage time, ms.
    pub fn record_outage(&mut self, ms: f64) {
        self.metrics.total_outage_ms += ms;
    }

    pub fn entity(&self, device: DeviceId) -> Option<&MobileEntity> {
        self.entities.get(device.index())
    }

    pub fn entities(&self) -> &[MobileEntity] {
        &self.entities
    }

    pub fn metrics(&self) -> &MobilityMetrics {
        &self.metrics
    }
}
