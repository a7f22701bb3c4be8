//! Configuration error type.
//!
//! Every construction-time inconsistency surfaces here, before any simulation
//! state exists.  Mid-run degenerate arithmetic (empty aggregates, zero
//! denominators) is absorbed locally with neutral values and never reaches
//! this type.

use thiserror::Error;

use crate::tier::Tier;

/// A rejected configuration.  The first inconsistency found wins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tier {0} referenced but absent from the topology table")]
    MissingTier(Tier),

    #[error("tier {0} declares zero nodes")]
    EmptyTier(Tier),

    #[error("tier {tier}: {nodes} nodes but {positions} deployment positions")]
    PositionCount {
        tier:      Tier,
        nodes:     u32,
        positions: usize,
    },

    #[error("tier {0}: negative capacity or bandwidth")]
    NegativeCapacity(Tier),

    #[error("tier {0}: negative latency, cost rate, or distance")]
    NegativeRate(Tier),

    #[error("workload increment must be at least 1")]
    ZeroIncrement,

    #[error("workload ramp inverted: start {start} exceeds max {max}")]
    RampBounds { start: u32, max: u32 },

    #[error("negative per-device data size")]
    NegativeData,

    #[error("arena bounds inverted")]
    InvertedArea,

    #[error("mobility `{0}` must be non-negative")]
    NegativeMobility(&'static str),

    #[error("mobility `{0}` range inverted or negative")]
    BadRange(&'static str),
}

/// Shorthand result type for construction-time validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
