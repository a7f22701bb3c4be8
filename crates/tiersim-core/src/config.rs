//! Run configuration: topology, workload ramp, mobility.
//!
//! # Design
//!
//! Configuration is plain data validated **once**, before any simulation
//! state is built.  `Default` impls reproduce the reference deployment
//! (three edge micro-DCs, two regional sites, one cloud core, a 1 km²
//! arena); applications override fields and call [`SimConfig::validate`],
//! or let the builder do it.
//!
//! Anything wrong here is fatal — there is no partial construction and no
//! mid-run reconfiguration.

use std::collections::BTreeMap;

use crate::error::{ConfigError, ConfigResult};
use crate::geo::Vec2;
use crate::tier::Tier;

// ── TierSpec ─────────────────────────────────────────────────────────────────

/// Per-tier node template: every node of a tier is stamped from this.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierSpec {
    /// Number of nodes deployed at this tier.
    pub nodes: u32,
    /// Compute capacity per node, abstract cpu units.
    pub cpu: f64,
    /// Memory capacity per node, KB.
    pub memory: f64,
    /// Storage capacity per node, KB.
    pub storage: f64,
    /// Uplink bandwidth per node, kbps.
    pub bandwidth_kbps: f64,
    /// Service latency per placed task, ms.
    pub latency_ms: f64,
    /// Monetary cost per cpu unit processed.
    pub cost_per_cpu: f64,
    /// Monetary cost per KB transferred.
    pub cost_per_kb: f64,
    /// Representative device→node distance, metres (propagation and energy).
    pub distance_m: f64,
    /// Deployment coordinates, one per node.
    pub positions: Vec<Vec2>,
}

impl TierSpec {
    pub fn validate(&self, tier: Tier) -> ConfigResult<()> {
        if self.nodes == 0 {
            return Err(ConfigError::EmptyTier(tier));
        }
        if self.positions.len() != self.nodes as usize {
            return Err(ConfigError::PositionCount {
                tier,
                nodes: self.nodes,
                positions: self.positions.len(),
            });
        }
        if self.cpu < 0.0
            || self.memory < 0.0
            || self.storage < 0.0
            || self.bandwidth_kbps < 0.0
        {
            return Err(ConfigError::NegativeCapacity(tier));
        }
        if self.latency_ms < 0.0
            || self.cost_per_cpu < 0.0
            || self.cost_per_kb < 0.0
            || self.distance_m < 0.0
        {
            return Err(ConfigError::NegativeRate(tier));
        }
        Ok(())
    }
}

// ── TopologyConfig ───────────────────────────────────────────────────────────

/// The tier → template table.  Iteration follows [`Tier::ORDER`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopologyConfig {
    tiers: BTreeMap<Tier, TierSpec>,
}

impl TopologyConfig {
    /// An empty table — populate with [`set`](TopologyConfig::set) before use.
    pub fn empty() -> Self {
        Self { tiers: BTreeMap::new() }
    }

    /// Insert or replace one tier's template.
    pub fn set(&mut self, tier: Tier, spec: TierSpec) -> &mut Self {
        self.tiers.insert(tier, spec);
        self
    }

    /// The template for `tier`.  A referenced-but-absent tier is a
    /// configuration error, surfaced before any state is built.
    pub fn spec(&self, tier: Tier) -> ConfigResult<&TierSpec> {
        self.tiers.get(&tier).ok_or(ConfigError::MissingTier(tier))
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.tiers.contains_key(&tier)
    }

    /// Populated tiers in [`Tier::ORDER`] (the `BTreeMap` key order is the
    /// variant order).
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierSpec)> {
        self.tiers.iter().map(|(t, s)| (*t, s))
    }

    /// Total node count across all populated tiers.
    pub fn total_nodes(&self) -> usize {
        self.tiers.values().map(|s| s.nodes as usize).sum()
    }

    /// A full run needs the complete hierarchy: every tier in
    /// [`Tier::ORDER`] present and internally consistent.  (Partly populated
    /// tables are still constructible for component-level use.)
    pub fn validate(&self) -> ConfigResult<()> {
        for tier in Tier::ORDER {
            self.spec(tier)?.validate(tier)?;
        }
        Ok(())
    }
}

impl Default for TopologyConfig {
    /// The reference deployment: 3 edge micro-DCs, 2 regional sites, 1 cloud
    /// core, capacities and rates scaled so the edge saturates first.
    fn default() -> Self {
        let mut topology = TopologyConfig::empty();
        topology.set(Tier::Edge, TierSpec {
            nodes:          3,
            cpu:            280_000.0,
            memory:         300_000.0,
            storage:        800_000.0,
            bandwidth_kbps: 164_000.0,
            latency_ms:     5.0,
            cost_per_cpu:   0.000_05,
            cost_per_kb:    0.000_02,
            distance_m:     2_000.0,
            positions:      vec![
                Vec2::new(100.0, 200.0),
                Vec2::new(400.0, 800.0),
                Vec2::new(900.0, 100.0),
            ],
        });
        topology.set(Tier::Regional, TierSpec {
            nodes:          2,
            cpu:            6_400_000.0,
            memory:         10_240_000.0,
            storage:        40_000_000.0,
            bandwidth_kbps: 800_000.0,
            latency_ms:     50.0,
            cost_per_cpu:   0.000_1,
            cost_per_kb:    0.000_005,
            distance_m:     200_000.0,
            positions:      vec![Vec2::new(250.0, 250.0), Vec2::new(750.0, 750.0)],
        });
        topology.set(Tier::Cloud, TierSpec {
            nodes:          1,
            cpu:            100_800_000.0,
            memory:         80_640_000.0,
            storage:        1_512_000_000.0,
            bandwidth_kbps: 1_050_000.0,
            latency_ms:     300.0,
            cost_per_cpu:   0.000_2,
            cost_per_kb:    0.000_005,
            distance_m:     2_000_000.0,
            positions:      vec![Vec2::new(500.0, 500.0)],
        });
        topology
    }
}

// ── WorkloadConfig ───────────────────────────────────────────────────────────

/// Linear device ramp driving per-round batch sizes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkloadConfig {
    /// Devices submitting in round 1.
    pub start_devices: u32,
    /// Ramp ceiling — also the size of the mobile-entity population.
    pub max_devices: u32,
    /// Devices added per round.
    pub increment: u32,
    /// Demand and payload per device, KB.
    pub data_per_device_kb: f64,
}

impl WorkloadConfig {
    /// Total rounds: the ramp runs start, start+inc, … until the ceiling is
    /// reached.  Meaningful only for validated configs (`increment ≥ 1`).
    #[inline]
    pub fn round_count(&self) -> u32 {
        (self.max_devices - self.start_devices) / self.increment + 1
    }

    /// Devices submitting in round `round` (1-based), clamped to the ceiling.
    #[inline]
    pub fn devices_for_round(&self, round: u32) -> u32 {
        let ramp = self
            .start_devices
            .saturating_add(round.saturating_sub(1).saturating_mul(self.increment));
        ramp.min(self.max_devices)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if self.max_devices < self.start_devices {
            return Err(ConfigError::RampBounds {
                start: self.start_devices,
                max:   self.max_devices,
            });
        }
        if self.data_per_device_kb < 0.0 {
            return Err(ConfigError::NegativeData);
        }
        Ok(())
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            start_devices:      100,
            max_devices:        6_000,
            increment:          10,
            data_per_device_kb: 10.0,
        }
    }
}

// ── Mobility configuration ───────────────────────────────────────────────────

/// Rectangular movement arena, metres.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AreaBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(ConfigError::InvertedArea);
        }
        Ok(())
    }
}

impl Default for AreaBounds {
    /// The 1 km² reference arena.
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1_000.0, y_min: 0.0, y_max: 1_000.0 }
    }
}

/// Mobility model knobs, consumed once at build time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MobilityConfig {
    /// Master switch: off means every position in the run stays static.
    pub enabled: bool,
    /// Also give infrastructure nodes waypoint models (nomadic deployments).
    pub apply_to_servers: bool,
    /// Simulated time each round's movement integrates over, ms.
    pub time_step_ms: f64,
    /// Latency charged per successful handover, ms.
    pub handover_latency_ms: f64,
    /// Hysteresis: a candidate link must beat the current one by this many dB.
    pub handover_threshold_db: f64,
    /// Fallback speed for entities without a waypoint model, m/s.
    pub default_speed_m_s: f64,
    /// Movement arena.
    pub area: AreaBounds,
    /// Waypoint leg speed draw range (min, max), m/s.
    pub speed_range: (f64, f64),
    /// Waypoint pause draw range (min, max), seconds.
    pub pause_range: (f64, f64),
}

impl MobilityConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.area.validate()?;
        if self.time_step_ms < 0.0 {
            return Err(ConfigError::NegativeMobility("time_step_ms"));
        }
        if self.handover_latency_ms < 0.0 {
            return Err(ConfigError::NegativeMobility("handover_latency_ms"));
        }
        if self.handover_threshold_db < 0.0 {
            return Err(ConfigError::NegativeMobility("handover_threshold_db"));
        }
        if self.default_speed_m_s < 0.0 {
            return Err(ConfigError::NegativeMobility("default_speed_m_s"));
        }
        let (spd_lo, spd_hi) = self.speed_range;
        if spd_lo < 0.0 || spd_hi < spd_lo {
            return Err(ConfigError::BadRange("speed"));
        }
        let (pse_lo, pse_hi) = self.pause_range;
        if pse_lo < 0.0 || pse_hi < pse_lo {
            return Err(ConfigError::BadRange("pause"));
        }
        Ok(())
    }
}

impl Default for MobilityConfig {
    fn default() -> Self {
        Self {
            enabled:               true,
            apply_to_servers:      true,
            time_step_ms:          100.0,
            handover_latency_ms:   20.0,
            handover_threshold_db: 3.0,
            default_speed_m_s:     15.0,
            area:                  AreaBounds::default(),
            speed_range:           (1.0, 5.0),
            pause_range:           (0.0, 2.0),
        }
    }
}

// ── SimConfig ────────────────────────────────────────────────────────────────

/// Everything a run needs, validated as a unit before any state is built.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always reproduces the run exactly.
    pub seed: u64,
    pub topology: TopologyConfig,
    pub workload: WorkloadConfig,
    pub mobility: MobilityConfig,
}

impl SimConfig {
    /// Check the whole configuration; the first inconsistency wins.
    pub fn validate(&self) -> ConfigResult<()> {
        self.topology.validate()?;
        self.workload.validate()?;
        self.mobility.validate()
    }
}
