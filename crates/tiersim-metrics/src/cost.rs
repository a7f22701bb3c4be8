//! Monetary cost formulas.

use crate::round_dp;

/// Data (KB) times the per-KB transfer rate, 4 dp.
#[inline]
pub fn transmission_cost(data_kb: f64, rate_per_kb: f64) -> f64 {
    round_dp(data_kb * rate_per_kb, 4)
}

/// Cpu units times the per-unit processing rate, 6 dp — processing rates are
/// tiny, 4 dp would flush small tasks to zero.
#[inline]
pub fn processing_cost(cpu_units: f64, rate_per_cpu: f64) -> f64 {
    round_dp(cpu_units * rate_per_cpu, 6)
}

/// Transmission + processing cost, 4 dp.
#[inline]
pub fn total_cost(data_kb: f64, cpu_units: f64, rate_per_kb: f64, rate_per_cpu: f64) -> f64 {
    round_dp(
        transmission_cost(data_kb, rate_per_kb) + processing_cost(cpu_units, rate_per_cpu),
        4,
    )
}
