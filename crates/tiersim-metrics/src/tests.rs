//! Unit tests for the formula layer.

#[cfg(test)]
mod rounding {
    use crate::{mean, round_dp};

    #[test]
    fn round_to_places() {
        assert_eq!(round_dp(3.14159, 2), 3.14);
        assert_eq!(round_dp(0.123456, 4), 0.1235);
        assert_eq!(round_dp(-1.005, 1), -1.0);
        assert_eq!(round_dp(42.0, 6), 42.0);
    }

    #[test]
    fn mean_of_samples() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}

#[cfg(test)]
mod delay {
    use crate::delay::{
        propagation_delay_ms, response_time_ms, total_delay_ms, transmission_delay_ms,
    };

    #[test]
    fn transmission_is_serialization_time() {
        // 10 KB over a 164 Mbit-class edge link.
        let ms = transmission_delay_ms(10.0, 164_000.0);
        assert!((ms - 80.0 / 164.0).abs() < 1e-12, "got {ms}");
    }

    #[test]
    fn transmission_zero_bandwidth_is_neutral() {
        assert_eq!(transmission_delay_ms(10.0, 0.0), 0.0);
    }

    #[test]
    fn propagation_per_tier_distances() {
        assert_eq!(propagation_delay_ms(2_000.0), 0.01);
        assert_eq!(propagation_delay_ms(200_000.0), 1.0);
        assert_eq!(propagation_delay_ms(2_000_000.0), 10.0);
    }

    #[test]
    fn total_is_rounded_sum() {
        assert_eq!(total_delay_ms(10.0, 164_000.0, 2_000.0), 0.4978);
    }

    #[test]
    fn response_time() {
        assert_eq!(response_time_ms(5.0, 2.5), 7.5);
    }
}

#[cfg(test)]
mod cost {
    use crate::cost::{processing_cost, total_cost, transmission_cost};

    #[test]
    fn transmission() {
        assert_eq!(transmission_cost(10.0, 0.000_02), 0.0002);
        assert_eq!(transmission_cost(12.0, 0.000_005), 0.0001);
    }

    #[test]
    fn processing_keeps_six_places() {
        assert_eq!(processing_cost(100.0, 0.000_05), 0.005);
        assert_eq!(processing_cost(10.0, 0.000_05), 0.000_5);
    }

    #[test]
    fn total_is_rounded_sum() {
        // tx = 0.0002, proc = 0.0005 → 0.0007
        assert_eq!(total_cost(10.0, 10.0, 0.000_02, 0.000_05), 0.0007);
    }
}

#[cfg(test)]
mod energy {
    use tiersim_core::Tier;

    use crate::energy::{energy_consumption, tier_energy, EDGE_BASE_RATE};

    #[test]
    fn edge_payload() {
        // 10 KB × (1.5e-6 + 2000 m × 1e-9) = 3.5e-5
        assert_eq!(tier_energy(Tier::Edge, 10.0, 2_000.0), 0.000_035);
        assert_eq!(
            energy_consumption(10.0, EDGE_BASE_RATE, 2_000.0),
            0.000_035
        );
    }

    #[test]
    fn farther_tiers_cost_more() {
        let edge     = tier_energy(Tier::Edge, 10.0, 2_000.0);
        let regional = tier_energy(Tier::Regional, 10.0, 200_000.0);
        let cloud    = tier_energy(Tier::Cloud, 10.0, 2_000_000.0);
        assert_eq!(regional, 0.00203);
        assert_eq!(cloud, 0.02005);
        assert!(edge < regional && regional < cloud);
    }
}

#[cfg(test)]
mod usage {
    use crate::usage::{
        bandwidth_utilization_pct, congestion_pct, failure_rate_pct, utilization_pct,
    };

    #[test]
    fn utilization_from_availability() {
        assert_eq!(utilization_pct(50.0, 200.0), 75.0);
        assert_eq!(utilization_pct(200.0, 200.0), 0.0);
        assert_eq!(utilization_pct(0.0, 200.0), 100.0);
    }

    #[test]
    fn utilization_zero_capacity_is_idle() {
        assert_eq!(utilization_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn congestion_ratio() {
        assert_eq!(congestion_pct(500.0, 1_000.0), 50.0);
        assert_eq!(congestion_pct(500.0, 0.0), 0.0);
    }

    #[test]
    fn oversubscription_exceeds_hundred() {
        assert_eq!(congestion_pct(2_500.0, 1_000.0), 250.0);
    }

    #[test]
    fn failure_rate_guards_empty_population() {
        assert_eq!(failure_rate_pct(0, 0), 0.0);
        assert_eq!(failure_rate_pct(10, 3), 30.0);
    }

    #[test]
    fn bandwidth_share() {
        assert_eq!(bandwidth_utilization_pct(500.0, 1_000.0), 50.0);
        assert_eq!(bandwidth_utilization_pct(500.0, 0.0), 0.0);
    }
}
