//! End-to-end checks of scheduling, replay and stats.

use proptest::prelude::*;

use seektool::{
    aggregate, replay, schedule_cscan, schedule_sstf, Algorithm, DiskGeometry, EngineError,
    MoveEvent, RequestGenerator, RequestSet,
};

const CLASSIC: [u32; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

fn sorted(mut values: Vec<u32>) -> Vec<u32> {
    values.sort_unstable();
    values
}

#[test]
fn test_sstf_classic_queue() {
    let plan = schedule_sstf(&CLASSIC, 53);
    assert_eq!(plan.visit_order()[0], 65);
    assert_eq!(plan.total_seek(), 236);
}

#[test]
fn test_arrival_order_cost_for_classic_queue() {
    // Servicing in arrival order instead costs 640.
    let fcfs = seektool::SeekPlan::new(Algorithm::Sstf, 53, CLASSIC.to_vec(), 0);
    assert_eq!(fcfs.path_distance(), 640);
}

#[test]
fn test_cscan_classic_queue() {
    let plan = schedule_cscan(&CLASSIC, 53, 200, true).unwrap();
    assert_eq!(plan.visit_order(), &[65, 67, 98, 122, 124, 183, 14, 37]);
    assert_eq!(plan.total_seek(), 382);
}

#[test]
fn test_empty_request_set_everywhere() {
    let sstf = schedule_sstf(&[], 50);
    let cscan = schedule_cscan(&[], 50, 200, true).unwrap();

    for plan in [&sstf, &cscan] {
        assert!(plan.visit_order().is_empty());
        assert_eq!(plan.total_seek(), 0);
        assert_eq!(aggregate(plan, 0).average_seek, 0.0);
        assert_eq!(replay(plan, 50, 0.5).count(), 0);
    }
}

#[test]
fn test_scheduler_trait_and_free_functions_agree() {
    let geometry = DiskGeometry::new(200, 53).unwrap();
    let requests = RequestSet::new(geometry, CLASSIC.to_vec()).unwrap();

    assert_eq!(
        Algorithm::Sstf.scheduler(true).schedule(&requests),
        schedule_sstf(&CLASSIC, 53)
    );
    assert_eq!(
        Algorithm::CScan.scheduler(false).schedule(&requests),
        schedule_cscan(&CLASSIC, 53, 200, false).unwrap()
    );
}

#[test]
fn test_geometry_errors_surface_before_scheduling() {
    assert!(matches!(
        schedule_cscan(&CLASSIC, 0, 0, true),
        Err(EngineError::InvalidGeometry { size: 0 })
    ));
    assert!(matches!(
        DiskGeometry::new(200, 999),
        Err(EngineError::HeadOutOfRange { head: 999, size: 200 })
    ));
}

#[test]
fn test_generated_requests_schedule_cleanly() {
    let requests = RequestGenerator::from_seed(2024).generate(16, 200).unwrap();
    let geometry = DiskGeometry::new(200, 50).unwrap();
    let set = RequestSet::new(geometry, requests.clone()).unwrap();

    for algorithm in Algorithm::ALL {
        let plan = algorithm.scheduler(true).schedule(&set);
        assert_eq!(sorted(plan.visit_order().to_vec()), sorted(requests.clone()));
    }
}

#[test]
fn test_replay_can_be_abandoned_and_rerun() {
    let plan = schedule_cscan(&CLASSIC, 53, 200, true).unwrap();
    let partial: Vec<MoveEvent> = replay(&plan, 53, 0.5).take(2).collect();
    let full: Vec<MoveEvent> = replay(&plan, 53, 0.5).collect();
    assert_eq!(&full[..2], &partial[..]);
    assert_eq!(full.len(), plan.len());
}

fn workload() -> impl Strategy<Value = (u32, u32, Vec<u32>)> {
    (2u32..500).prop_flat_map(|size| {
        (
            Just(size),
            0..size,
            prop::collection::vec(0..size, 0..24),
        )
    })
}

proptest! {
    #[test]
    fn prop_plans_are_permutations((size, head, requests) in workload()) {
        let sstf = schedule_sstf(&requests, head);
        let cscan = schedule_cscan(&requests, head, size, true).unwrap();
        prop_assert_eq!(sorted(sstf.visit_order().to_vec()), sorted(requests.clone()));
        prop_assert_eq!(sorted(cscan.visit_order().to_vec()), sorted(requests.clone()));
    }

    #[test]
    fn prop_sstf_cost_is_its_path((_size, head, requests) in workload()) {
        let plan = schedule_sstf(&requests, head);
        prop_assert_eq!(plan.total_seek(), plan.path_distance());
    }

    #[test]
    fn prop_sstf_always_takes_nearest((_size, head, requests) in workload()) {
        let plan = schedule_sstf(&requests, head);
        let mut pending = requests.clone();
        let mut current = head;
        for &picked in plan.visit_order() {
            let best = pending.iter().map(|&c| current.abs_diff(c)).min().unwrap();
            // First pending entry at the best distance, i.e. the stable tie-break.
            let expected = pending.iter().position(|&c| current.abs_diff(c) == best).unwrap();
            prop_assert_eq!(picked, pending[expected]);
            pending.remove(expected);
            current = picked;
        }
    }

    #[test]
    fn prop_cscan_passes_ascend((size, head, requests) in workload()) {
        let plan = schedule_cscan(&requests, head, size, true).unwrap();
        let upper: Vec<u32> = plan.visit_order().iter().copied().filter(|&c| c >= head).collect();
        let lower: Vec<u32> = plan.visit_order().iter().copied().filter(|&c| c < head).collect();

        prop_assert!(upper.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(lower.windows(2).all(|w| w[0] <= w[1]));
        // Everything at or above the head is serviced before the wrap.
        prop_assert_eq!(&plan.visit_order()[..upper.len()], &upper[..]);
    }

    #[test]
    fn prop_jump_cost_delta((size, head, requests) in workload()) {
        let charged = schedule_cscan(&requests, head, size, true).unwrap();
        let free = schedule_cscan(&requests, head, size, false).unwrap();
        let wraps = requests.iter().any(|&c| c < head);

        let expected_delta = if wraps { u64::from(size - 1) } else { 0 };
        prop_assert_eq!(charged.total_seek() - free.total_seek(), expected_delta);
    }

    #[test]
    fn prop_replay_is_deterministic((_size, head, requests) in workload(), ms in 0.0f64..10.0) {
        let plan = schedule_sstf(&requests, head);
        let first: Vec<MoveEvent> = replay(&plan, head, ms).collect();
        let second: Vec<MoveEvent> = replay(&plan, head, ms).collect();

        prop_assert_eq!(first.len(), plan.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.step_latency_ms.to_bits(), b.step_latency_ms.to_bits());
            prop_assert_eq!(a, b);
        }
        if let Some(last) = first.last() {
            prop_assert_eq!(last.cumulative_seek, plan.total_seek());
        }
    }

    #[test]
    fn prop_average_is_total_over_count((size, head, requests) in workload()) {
        let plan = schedule_cscan(&requests, head, size, false).unwrap();
        let stats = aggregate(&plan, requests.len());
        let expected = if requests.is_empty() { 0.0 } else { plan.total_seek() as f64 / requests.len() as f64 };
        prop_assert_eq!(stats.average_seek, expected);
    }
}
