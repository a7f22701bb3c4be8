//! `tiersim-metrics` — the pure formula layer.
//!
//! Every model quantity (delay, cost, energy, utilization) is a free function
//! of its inputs: no simulation state, no I/O, no RNG.  Results are rounded
//! to the fixed decimal places the reporting layer expects, so identical
//! inputs print identically everywhere.
//!
//! | Module     | Contents                                           |
//! |------------|----------------------------------------------------|
//! | [`delay`]  | transmission / propagation / total / response      |
//! | [`cost`]   | transmission / processing / total monetary cost    |
//! | [`energy`] | per-tier energy model                              |
//! | [`usage`]  | utilization, congestion, failure, bandwidth ratios |
//!
//! Degenerate inputs (zero capacity, zero bandwidth, empty samples) yield
//! neutral values rather than NaN — the round loop never branches on errors
//! from this layer.

pub mod cost;
pub mod delay;
pub mod energy;
pub mod usage;

#[cfg(test)]
mod tests;

pub use cost::{processing_cost, total_cost, transmission_cost};
pub use delay::{propagation_delay_ms, response_time_ms, total_delay_ms, transmission_delay_ms};
pub use energy::{energy_consumption, tier_energy};
pub use usage::{bandwidth_utilization_pct, congestion_pct, failure_rate_pct, utilization_pct};

/// Round `value` to `decimals` places, half away from zero.
#[inline]
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Arithmetic mean; `None` for an empty sample set.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}
