//! Unit tests for tasks and the ramp generator.

#[cfg(test)]
mod task {
    use tiersim_core::{DeviceId, ServerId, SimTime, TaskId};

    use crate::task::{Priority, Task, TaskStatus};

    fn task() -> Task {
        Task::new(TaskId(1), 10.0, 10.0, 10.0, 10.0, Priority::Normal)
    }

    #[test]
    fn fresh_task_is_created_and_untagged() {
        let t = task();
        assert_eq!(t.status, TaskStatus::Created);
        assert_eq!(t.device, DeviceId::INVALID);
        assert!(t.assigned.is_none());
        assert!(!t.status.is_terminal());
    }

    #[test]
    fn schedule_then_complete() {
        let mut t = task();
        t.mark_scheduled(ServerId(2));
        assert_eq!(t.status, TaskStatus::Scheduled);
        assert_eq!(t.assigned, Some(ServerId(2)));

        t.complete(SimTime(3.0), SimTime(8.0));
        assert_eq!(t.status, TaskStatus::Completed);
        assert!(t.status.is_terminal());
        assert_eq!(t.execution_delay(), 5.0);
    }

    #[test]
    fn failed_task_has_no_window() {
        let mut t = task();
        t.fail();
        assert_eq!(t.status, TaskStatus::Failed);
        assert_eq!(t.execution_delay(), 0.0);
    }

    #[test]
    fn priority_codes() {
        assert_eq!(Priority::High.code(), 1);
        assert_eq!(Priority::Normal.code(), 2);
        assert_eq!(Priority::Low.code(), 3);
        assert_eq!(Priority::Low.to_string(), "3");
    }
}

#[cfg(test)]
mod generator {
    use tiersim_core::config::WorkloadConfig;
    use tiersim_core::SimRng;

    use crate::generator::{DemandSource, WorkloadGenerator};
    use crate::task::Priority;

    fn source(start: u32, max: u32, inc: u32) -> WorkloadGenerator {
        let workload = WorkloadConfig {
            start_devices:      start,
            max_devices:        max,
            increment:          inc,
            data_per_device_kb: 10.0,
        };
        WorkloadGenerator::new(workload, SimRng::new(42))
    }

    #[test]
    fn batch_sizes_follow_the_ramp() {
        let mut r#gen = source(100, 150, 10);
        assert_eq!(r#gen.generate(1).len(), 100);
        assert_eq!(r#gen.generate(2).len(), 110);
        assert_eq!(r#gen.generate(6).len(), 150);
        // Past the ceiling the batch stays clamped.
        assert_eq!(r#gen.generate(7).len(), 150);
    }

    #[test]
    fn demands_mirror_the_data_knob() {
        let mut r#gen = source(3, 3, 1);
        for t in r#gen.generate(1) {
            assert_eq!(t.cpu_demand, 10.0);
            assert_eq!(t.storage_demand, 10.0);
            assert_eq!(t.memory_demand, 10.0);
            assert_eq!(t.data_size_kb, 10.0);
        }
    }

    #[test]
    fn ids_are_monotonic_across_rounds() {
        let mut r#gen = source(2, 6, 2);
        let mut seen = Vec::new();
        for round in 1..=3 {
            for t in r#gen.generate(round) {
                seen.push(t.id.0);
            }
        }
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(seen.len(), 2 + 4 + 6);
        assert_eq!(seen, sorted, "ids must be unique and increasing");
    }

    #[test]
    fn priorities_are_deterministic_per_seed() {
        let draws = |seed: u64| -> Vec<u8> {
            let workload = WorkloadConfig {
                start_devices:      50,
                max_devices:        50,
                increment:          1,
                data_per_device_kb: 1.0,
            };
            WorkloadGenerator::new(workload, SimRng::new(seed))
                .generate(1)
                .iter()
                .map(|t| t.priority.code())
                .collect()
        };
        assert_eq!(draws(7), draws(7));
        // All three classes show up in a 50-task batch with overwhelming odds.
        let batch = draws(7);
        for class in Priority::ALL {
            assert!(batch.contains(&class.code()), "missing {class:?}");
        }
    }
}
