//! Movement and link dynamics: who is where, and which server hears them.
//!
//! | Module                 | Contents                                              |
//! |------------------------|-------------------------------------------------------|
//! | [`waypoint`]           | Random-waypoint mover over a rectangular arena        |
//! | [`entity`]             | Mobile device: position, RSS, hysteresis-gated picks  |
//! | [`manager`]            | Per-round orchestration and handover bookkeeping      |
//! | [`metrics`]            | Cumulative counters and their derived statistics      |
//!
//! # Design
//!
//! The manager advances everything in lockstep once per round: optional
//! per-server movers first (base stations can roam too), then every entity,
//! then the handover rule. Whatever the round produced — switches plus the
//! latency they cost — comes back as a [`RoundMobility`] so the caller can
//! charge the clock exactly once. Cumulative totals live in
//! [`MobilityMetrics`] and are surfaced through [`MobilityManager::snapshot`].

pub mod entity;
pub mod manager;
pub mod metrics;
pub mod waypoint;


pub use entity::{MobileEntity, Position};
pub use manager::{MobilityManager, MobilitySnapshot, RoundMobility};
pub use metrics::MobilityMetrics;
pub use waypoint::RandomWaypoint;
