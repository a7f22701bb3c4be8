//! `tiersim-core` — foundational types for the tiersim placement simulator.
//!
//! This crate is a dependency of every other `tiersim-*` crate.  It
//! intentionally has no `tiersim-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `ServerId`, `DeviceId`, `TaskId`                       |
//! | [`geo`]    | `Vec2` — flat metered arena geometry                   |
//! | [`clock`]  | `SimTime`, `SimClock`                                  |
//! | [`rng`]    | `SimRng` — deterministic per-model stream derivation   |
//! | [`tier`]   | `Tier` enum and the fixed spill-over order             |
//! | [`config`] | Topology / workload / mobility configuration           |
//! | [`error`]  | `ConfigError`, `ConfigResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod clock;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod tier;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::{SimClock, SimTime};
pub use config::{
    AreaBounds, MobilityConfig, SimConfig, TierSpec, TopologyConfig, WorkloadConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use geo::Vec2;
pub use ids::{DeviceId, ServerId, TaskId};
pub use rng::SimRng;
pub use tier::Tier;
