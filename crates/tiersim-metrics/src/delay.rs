//! Delay formulas, all in milliseconds.

use crate::round_dp;

/// Signal propagation speed, m/s (fiber, roughly two-thirds of c).
pub const PROPAGATION_SPEED_M_S: f64 = 2.0e8;

/// Serialization delay for `data_kb` over a `bandwidth_kbps` link.
///
/// Left unrounded: per-task values are summed first and rounded once at the
/// reporting edge.  Zero-bandwidth links yield 0.0.
#[inline]
pub fn transmission_delay_ms(data_kb: f64, bandwidth_kbps: f64) -> f64 {
    if bandwidth_kbps <= 0.0 {
        return 0.0;
    }
    data_kb * 8.0 / bandwidth_kbps * 1000.0
}

/// One-way propagation delay over `distance_m`, 4 dp.
#[inline]
pub fn propagation_delay_ms(distance_m: f64) -> f64 {
    round_dp(distance_m / PROPAGATION_SPEED_M_S * 1000.0, 4)
}

/// Transmission + propagation, 4 dp.
#[inline]
pub fn total_delay_ms(data_kb: f64, bandwidth_kbps: f64, distance_m: f64) -> f64 {
    round_dp(
        transmission_delay_ms(data_kb, bandwidth_kbps) + propagation_delay_ms(distance_m),
        4,
    )
}

/// Link latency plus processing time, 2 dp.
#[inline]
pub fn response_time_ms(latency_ms: f64, processing_ms: f64) -> f64 {
    round_dp(latency_ms + processing_ms, 2)
}
