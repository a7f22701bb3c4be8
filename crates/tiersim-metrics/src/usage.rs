//! Utilization and ratio formulas, all percentages at 2 dp.

use crate::round_dp;

/// 100 × (1 − available/capacity).  Zero capacity reads as idle.
#[inline]
pub fn utilization_pct(available: f64, capacity: f64) -> f64 {
    if capacity <= 0.0 {
        return 0.0;
    }
    round_dp(100.0 * (1.0 - available / capacity), 2)
}

/// Transferred data vs. link bandwidth.  Values over 100 simply mean the
/// link was oversubscribed across the window.
#[inline]
pub fn congestion_pct(data_kb: f64, bandwidth_kbps: f64) -> f64 {
    if bandwidth_kbps <= 0.0 {
        return 0.0;
    }
    round_dp(data_kb / bandwidth_kbps * 100.0, 2)
}

/// Failed share of a task population.
#[inline]
pub fn failure_rate_pct(total: u64, failed: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_dp(failed as f64 / total as f64 * 100.0, 2)
}

/// Used share of link capacity.
#[inline]
pub fn bandwidth_utilization_pct(used_kbps: f64, capacity_kbps: f64) -> f64 {
    if capacity_kbps <= 0.0 {
        return 0.0;
    }
    round_dp(used_kbps / capacity_kbps * 100.0, 2)
}
