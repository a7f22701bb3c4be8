//! Energy model: linear in payload size with a small distance surcharge.
//!
//! Farther tiers pay a higher per-KB base (deeper network traversal) plus a
//! per-metre surcharge, so cloud placements cost measurably more energy per
//! KB than edge placements even for identical payloads.

use tiersim_core::Tier;

use crate::round_dp;

/// Joules per KB at zero distance, by tier.
pub const EDGE_BASE_RATE: f64 = 0.000_001_5;
pub const REGIONAL_BASE_RATE: f64 = 0.000_003;
pub const CLOUD_BASE_RATE: f64 = 0.000_005;

/// Additional joules per KB per metre of link distance.
pub const DISTANCE_RATE_PER_M: f64 = 0.000_000_001;

/// energy = data × (base + distance × surcharge), 6 dp.
#[inline]
pub fn energy_consumption(data_kb: f64, base_rate: f64, distance_m: f64) -> f64 {
    round_dp(data_kb * (base_rate + distance_m * DISTANCE_RATE_PER_M), 6)
}

/// Energy for one payload placed at `tier`, using that tier's base rate.
pub fn tier_energy(tier: Tier, data_kb: f64, distance_m: f64) -> f64 {
    let base = match tier {
        Tier::Edge     => EDGE_BASE_RATE,
        Tier::Regional => REGIONAL_BASE_RATE,
        Tier::Cloud    => CLOUD_BASE_RATE,
    };
    energy_consumption(data_kb, base, distance_m)
}
