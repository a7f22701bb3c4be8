//! `tiersim-engine` — the round loop that ties the pieces together.
//!
//! # Round loop
//!
//! ```text
//! for round in 1..=workload.round_count():
//!   ① Movement  — advance servers and entities one time step; apply the
//!                 handover rule; snapshot dispersion and totals.
//!   ② Penalty   — charge this round's handover delay to the clock.
//!   ③ Expiry    — every server releases reservations past their deadline.
//!   ④ Demand    — the source produces the round's batch, one task per device.
//!   ⑤ Placement — the scheduler reserves capacity and marks tasks.
//!   ⑥ Outcomes  — placed tasks complete, the rest fail; mobility counters
//!                 absorb drops, RSS samples, and the round's throughput.
//!   ⑦ Emission  — one MetricsRecord per server that took work this round.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tiersim_core::{SimConfig, SimRng};
//! use tiersim_engine::{MemorySink, SimBuilder};
//! use tiersim_sched::GreedyTierScheduler;
//! use tiersim_workload::WorkloadGenerator;
//!
//! let config = SimConfig::default();
//! // Workload draws get their own seed lane, clear of the mobility streams.
//! let source = WorkloadGenerator::new(config.workload.clone(), SimRng::new(config.seed + 1));
//! let mut sim = SimBuilder::new(config, GreedyTierScheduler::new(), source).build()?;
//! let mut sink = MemorySink::new();
//! sim.run(&mut sink);
//! ```

pub mod builder;
pub mod error;
pub mod record;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{EngineError, EngineResult};
pub use record::{MemorySink, MetricsRecord, MetricsSink, NullSink};
pub use sim::Simulator;
