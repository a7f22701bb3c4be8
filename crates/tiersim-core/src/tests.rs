//! Unit tests for tiersim-core primitives.

#[cfg(test)]
mod ids {
    use crate::{DeviceId, ServerId, TaskId};

    #[test]
    fn index_cast() {
        assert_eq!(ServerId(42).index(), 42);
        assert_eq!(usize::from(DeviceId(7)), 7);
    }

    #[test]
    fn ordering() {
        assert!(ServerId(0) < ServerId(1));
        assert!(TaskId(100) > TaskId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ServerId::INVALID.0, u32::MAX);
        assert_eq!(DeviceId::INVALID.0, u32::MAX);
        assert_eq!(TaskId::INVALID.0, u64::MAX);
        assert_eq!(DeviceId::default(), DeviceId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ServerId(3).to_string(), "ServerId(3)");
    }
}

#[cfg(test)]
mod clock {
    use crate::{SimClock, SimTime};

    #[test]
    fn rounds_advance_by_one() {
        let mut clock = SimClock::new();
        clock.advance_round();
        clock.advance_round();
        assert_eq!(clock.now(), SimTime(2.0));
    }

    #[test]
    fn delay_charges_on_the_same_axis() {
        let mut clock = SimClock::new();
        clock.charge_delay(20.0);
        clock.advance_round();
        assert_eq!(clock.now(), SimTime(21.0));
    }

    #[test]
    fn negative_delay_is_ignored() {
        let mut clock = SimClock::new();
        clock.charge_delay(-5.0);
        clock.charge_delay(0.0);
        assert_eq!(clock.now(), SimTime::ZERO);
    }

    #[test]
    fn time_arithmetic() {
        let t = SimTime(10.0);
        assert_eq!(t.after(5.0), SimTime(15.0));
        assert_eq!(t + 2.5, SimTime(12.5));
        assert_eq!(SimTime(15.0).since(t), 5.0);
        assert!(SimTime(3.0) < SimTime(3.5));
    }

    #[test]
    fn display() {
        assert_eq!(SimTime(21.0).to_string(), "t=21.00");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn euclidean_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn displacement_arithmetic() {
        let v = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
        assert_eq!(v, Vec2::new(4.0, 6.0));
        let d = Vec2::new(5.0, 5.0) - Vec2::new(2.0, 1.0);
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(d.length(), 5.0);
        assert_eq!(d * 2.0, Vec2::new(6.0, 8.0));
    }
}

#[cfg(test)]
mod tier {
    use crate::Tier;

    #[test]
    fn spill_order_is_nearest_first() {
        assert_eq!(Tier::ORDER, [Tier::Edge, Tier::Regional, Tier::Cloud]);
    }

    #[test]
    fn variant_order_matches_spill_order() {
        // TopologyConfig iteration relies on Ord agreeing with ORDER.
        assert!(Tier::Edge < Tier::Regional);
        assert!(Tier::Regional < Tier::Cloud);
    }

    #[test]
    fn labels() {
        assert_eq!(Tier::Edge.as_str(), "Edge");
        assert_eq!(Tier::Cloud.to_string(), "Cloud");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(
                a.gen_range(0u64..1_000_000),
                b.gen_range(0u64..1_000_000)
            );
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut master = SimRng::new(7);
        let mut c0 = master.child(0);
        let mut c1 = master.child(1);
        let draws0: Vec<u64> = (0..8).map(|_| c0.gen_range(0..u64::MAX)).collect();
        let draws1: Vec<u64> = (0..8).map(|_| c1.gen_range(0..u64::MAX)).collect();
        assert_ne!(draws0, draws1);
    }

    #[test]
    fn child_derivation_is_reproducible() {
        let mut m1 = SimRng::new(42);
        let mut m2 = SimRng::new(42);
        let mut a = m1.child(5);
        let mut b = m2.child(5);
        assert_eq!(a.gen_range(0..u64::MAX), b.gen_range(0..u64::MAX));
    }

    #[test]
    fn choose_from_slice() {
        let mut rng = SimRng::new(1);
        let items = [10, 20, 30];
        for _ in 0..16 {
            assert!(items.contains(rng.choose(&items).copied().as_ref().unwrap()));
        }
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::{
        AreaBounds, ConfigError, MobilityConfig, SimConfig, Tier, TierSpec, TopologyConfig,
        Vec2, WorkloadConfig,
    };

    fn tiny_tier(nodes: u32) -> TierSpec {
        TierSpec {
            nodes,
            cpu:            100.0,
            memory:         100.0,
            storage:        100.0,
            bandwidth_kbps: 1_000.0,
            latency_ms:     1.0,
            cost_per_cpu:   0.001,
            cost_per_kb:    0.001,
            distance_m:     10.0,
            positions:      (0..nodes).map(|i| Vec2::new(i as f64, 0.0)).collect(),
        }
    }

    #[test]
    fn ramp_round_count() {
        let w = WorkloadConfig {
            start_devices:      100,
            max_devices:        150,
            increment:          10,
            data_per_device_kb: 10.0,
        };
        assert_eq!(w.round_count(), 6);
    }

    #[test]
    fn ramp_devices_clamp_at_ceiling() {
        let w = WorkloadConfig {
            start_devices:      100,
            max_devices:        150,
            increment:          10,
            data_per_device_kb: 10.0,
        };
        assert_eq!(w.devices_for_round(1), 100);
        assert_eq!(w.devices_for_round(4), 130);
        assert_eq!(w.devices_for_round(6), 150);
        assert_eq!(w.devices_for_round(99), 150);
    }

    #[test]
    fn single_round_when_start_equals_max() {
        let w = WorkloadConfig {
            start_devices:      500,
            max_devices:        500,
            increment:          10,
            data_per_device_kb: 1.0,
        };
        assert_eq!(w.round_count(), 1);
    }

    #[test]
    fn workload_validation() {
        let mut w = WorkloadConfig::default();
        w.increment = 0;
        assert_eq!(w.validate(), Err(ConfigError::ZeroIncrement));

        let mut w = WorkloadConfig::default();
        w.start_devices = 200;
        w.max_devices = 100;
        assert_eq!(
            w.validate(),
            Err(ConfigError::RampBounds { start: 200, max: 100 })
        );
    }

    #[test]
    fn missing_tier_is_fatal() {
        let mut topology = TopologyConfig::empty();
        topology.set(Tier::Edge, tiny_tier(1));
        assert!(topology.spec(Tier::Edge).is_ok());
        assert_eq!(
            topology.spec(Tier::Cloud).err(),
            Some(ConfigError::MissingTier(Tier::Cloud))
        );
        assert_eq!(
            topology.validate(),
            Err(ConfigError::MissingTier(Tier::Regional))
        );
    }

    #[test]
    fn position_count_must_match_nodes() {
        let mut spec = tiny_tier(3);
        spec.positions.pop();
        assert_eq!(
            spec.validate(Tier::Edge),
            Err(ConfigError::PositionCount { tier: Tier::Edge, nodes: 3, positions: 2 })
        );
    }

    #[test]
    fn topology_iterates_in_spill_order() {
        let topology = TopologyConfig::default();
        let tiers: Vec<Tier> = topology.iter().map(|(t, _)| t).collect();
        assert_eq!(tiers, vec![Tier::Edge, Tier::Regional, Tier::Cloud]);
        assert_eq!(topology.total_nodes(), 6);
    }

    #[test]
    fn reference_deployment_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn mobility_range_validation() {
        let mut m = MobilityConfig::default();
        m.speed_range = (5.0, 1.0);
        assert_eq!(m.validate(), Err(ConfigError::BadRange("speed")));

        let mut m = MobilityConfig::default();
        m.handover_threshold_db = -1.0;
        assert_eq!(
            m.validate(),
            Err(ConfigError::NegativeMobility("handover_threshold_db"))
        );

        let mut m = MobilityConfig::default();
        m.area = AreaBounds::new(10.0, 0.0, 0.0, 10.0);
        assert_eq!(m.validate(), Err(ConfigError::InvertedArea));
    }

    #[test]
    fn area_containment() {
        let area = AreaBounds::default();
        assert!(area.contains(Vec2::new(0.0, 0.0)));
        assert!(area.contains(Vec2::new(1_000.0, 500.0)));
        assert!(!area.contains(Vec2::new(-0.1, 500.0)));
    }
}
